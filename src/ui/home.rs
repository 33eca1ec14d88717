use chrono::Datelike;
use iced::widget::{button, column, container, row, scrollable, text, Column, Row};
use iced::{Alignment, Background, Color, Element, Length, Shadow, Vector};

use super::{heading, nav_links, scroll_id, ACCENT, INK, MUTED};
use crate::router::Route;
use crate::state::scroll::ScrollWatcher;
use crate::Message;

const PHOTOGRAPHER: &str = "Sarah Martin";

/// Where the pricing cards' booking buttons lead
pub const BOOKING_ROUTE: Route = Route::Gallery;

const ABOUT: &str = "Passionnée par la photographie depuis plus de 10 ans, je capture les \
moments précieux de la vie avec une approche artistique unique. Spécialisée dans les \
portraits, les mariages et les paysages, je m'efforce de créer des images qui racontent \
des histoires et évoquent des émotions.";

/// (title, description)
const PROJECTS: [(&str, &str); 3] = [
    ("Mariage en Provence", "Une célébration intime dans les champs de lavande"),
    ("Portraits Urbains", "Série de portraits artistiques en milieu urbain"),
    ("Nature Sauvage", "Paysages spectaculaires des Alpes françaises"),
];

/// (name, role, quote)
const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Marie & Pierre",
        "Mariés en 2023",
        "Sarah a capturé les moments les plus précieux de notre mariage avec une sensibilité extraordinaire. Chaque photo raconte une histoire.",
    ),
    (
        "Thomas Laurent",
        "Séance Portrait",
        "Une expérience photo exceptionnelle ! Sarah sait mettre à l'aise et capturer la personnalité de chacun.",
    ),
    (
        "Sophie Martin",
        "Événement d'entreprise",
        "Professionnalisme et créativité au rendez-vous. Les photos de notre événement ont dépassé nos attentes.",
    ),
];

struct PricingPlan {
    title: &'static str,
    price: &'static str,
    features: [&'static str; 5],
}

const PRICING: [PricingPlan; 3] = [
    PricingPlan {
        title: "Portrait Individuel",
        price: "150€",
        features: [
            "Séance d'1 heure",
            "10 photos retouchées",
            "Galerie privée en ligne",
            "Livraison sous 7 jours",
            "Format haute résolution",
        ],
    },
    PricingPlan {
        title: "Mariage Essentiel",
        price: "1500€",
        features: [
            "Couverture de 8 heures",
            "300+ photos retouchées",
            "Album photo premium",
            "Galerie privée en ligne",
            "2 photographes",
        ],
    },
    PricingPlan {
        title: "Événement Pro",
        price: "800€",
        features: [
            "Couverture de 4 heures",
            "150+ photos retouchées",
            "Livraison express 48h",
            "Droits commerciaux inclus",
            "Format web optimisé",
        ],
    },
];

/// Build the landing page
pub fn view<'a>(scroll: &ScrollWatcher) -> Element<'a, Message> {
    let content = column![hero(), about(), projects(), testimonials(), pricing(), footer()]
        .width(Length::Fill);

    column![
        header(scroll.is_scrolled()),
        scrollable(content)
            .id(scroll_id(Route::Home))
            .on_scroll(Message::HomeScrolled)
            .height(Length::Fill),
    ]
    .into()
}

/// Top bar: transparent over the hero, solid once the page is scrolled
fn header<'a>(scrolled: bool) -> Element<'a, Message> {
    let (background, foreground) = if scrolled {
        (Color::from_rgba(1.0, 1.0, 1.0, 0.95), INK)
    } else {
        (Color::from_rgba(0.0, 0.0, 0.0, 0.3), Color::WHITE)
    };

    let logo = button(text(PHOTOGRAPHER).size(28).color(foreground))
        .on_press(Message::Navigate(Route::Home))
        .style(button::text);

    let bar = row![logo, container(nav_links(Route::Home, foreground)).width(Length::Fill).align_right(Length::Fill)]
        .align_y(Alignment::Center);

    container(bar)
        .padding(if scrolled { [16, 32] } else { [24, 32] })
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            shadow: if scrolled {
                Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 10.0,
                }
            } else {
                Shadow::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn hero<'a>() -> Element<'a, Message> {
    let content = column![
        text(PHOTOGRAPHER).size(64).color(Color::WHITE),
        text("Photographe Professionnelle").size(24).color(Color::WHITE),
        button(text("Découvrir mes œuvres").size(18))
            .on_press(Message::Navigate(Route::Gallery))
            .padding([12, 32]),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(520.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(520.0))
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::from_rgb(0.18, 0.2, 0.22))),
            ..container::Style::default()
        })
        .into()
}

fn about<'a>() -> Element<'a, Message> {
    section(
        column![heading("À Propos"), text(ABOUT).size(18).color(MUTED)]
            .spacing(20)
            .max_width(800)
            .align_x(Alignment::Center),
    )
}

fn projects<'a>() -> Element<'a, Message> {
    let cards = PROJECTS.iter().fold(Row::new().spacing(32), |cards, &(title, description)| {
        cards.push(card(
            column![
                text(title).size(22).color(INK),
                text(description).size(16).color(MUTED),
            ]
            .spacing(8),
        ))
    });

    section(column![heading("Derniers Projets"), cards].spacing(32).align_x(Alignment::Center))
}

fn testimonials<'a>() -> Element<'a, Message> {
    let cards = TESTIMONIALS.iter().fold(Row::new().spacing(32), |cards, &(name, role, quote)| {
        cards.push(card(
            column![
                text(format!("\u{201c}{}\u{201d}", quote)).size(16).color(MUTED),
                text(name).size(18).color(INK),
                text(role).size(14).color(ACCENT),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        ))
    });

    section(
        column![heading("Ce Que Disent Mes Clients"), cards]
            .spacing(32)
            .align_x(Alignment::Center),
    )
}

fn pricing<'a>() -> Element<'a, Message> {
    let cards = PRICING.iter().fold(Row::new().spacing(32), |cards, plan| {
        let features = plan.features.iter().fold(Column::new().spacing(6), |list, feature| {
            list.push(text(format!("✓ {}", feature)).size(15).color(MUTED))
        });

        cards.push(card(
            column![
                text(plan.title).size(22).color(INK),
                text(plan.price).size(36).color(ACCENT),
                features,
                button(text("Réserver"))
                    .on_press(Message::Navigate(BOOKING_ROUTE))
                    .padding([10, 28])
                    .style(button::primary),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        ))
    });

    section(
        column![
            heading("Mes Forfaits"),
            text("Des solutions adaptées à vos besoins").size(18).color(MUTED),
            cards,
        ]
        .spacing(24)
        .align_x(Alignment::Center),
    )
}

fn footer<'a>() -> Element<'a, Message> {
    let year = chrono::Local::now().year();

    let columns = row![
        column![
            text("À Propos de Moi").size(20),
            text("Photographe passionnée capturant les moments précieux de la vie. Basée à Paris et disponible pour des projets dans toute la France.").size(14),
        ]
        .spacing(12)
        .width(Length::FillPortion(2)),
        column![
            text("Contact").size(20),
            text("+33 6 12 34 56 78").size(14),
            text("contact@sarahmartin.com").size(14),
            text("Paris, France").size(14),
        ]
        .spacing(8)
        .width(Length::FillPortion(1)),
        column![
            text("Liens Rapides").size(20),
            button(text("Galerie").size(14).color(Color::WHITE))
                .on_press(Message::Navigate(Route::Gallery))
                .style(button::text)
                .padding(0),
        ]
        .spacing(8)
        .width(Length::FillPortion(1)),
    ]
    .spacing(48);

    let copyright = text(format!(
        "© {} {} Photography. Tous droits réservés.",
        year, PHOTOGRAPHER
    ))
    .size(13);

    container(column![columns, copyright].spacing(32))
        .padding([48, 64])
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(INK)),
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        })
        .into()
}

/// Full-width page section with centred content
fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding([64, 32])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fixed(320.0))
        .style(container::rounded_box)
        .into()
}
