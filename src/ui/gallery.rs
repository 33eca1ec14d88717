use iced::widget::{button, column, container, image, row, scrollable, text, Row};
use iced::{Alignment, Background, Color, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::{nav_links, scroll_id, INK, MUTED};
use crate::router::Route;
use crate::state::data::PhotoRecord;
use crate::state::gallery::FilterState;
use crate::Message;

/// Width of one photo card
const CARD_WIDTH: f32 = 350.0;
/// Gap between cards, both directions
const GRID_GAP: f32 = 32.0;

/// Build the gallery page for the mounted filter state
pub fn view<'a>(state: &'a FilterState, status: Option<&'a str>) -> Element<'a, Message> {
    let nav = container(
        row![
            button(text("PhotoPro").size(26).color(INK))
                .on_press(Message::Navigate(Route::Home))
                .style(button::text),
            container(nav_links(Route::Gallery, INK))
                .align_right(Length::Fill),
        ]
        .align_y(Alignment::Center),
    )
    .padding([16, 32])
    .width(Length::Fill)
    .style(container::rounded_box);

    let mut page = column![
        text("Ma Galerie").size(48).color(INK),
        text("Découvrez mes meilleures œuvres à travers différentes catégories")
            .size(20)
            .color(MUTED),
    ]
    .spacing(16)
    .padding(32)
    .width(Length::Fill)
    .align_x(Alignment::Center);

    if let Some(status) = status {
        page = page.push(text(status).size(14).color(Color::from_rgb(0.75, 0.22, 0.17)));
    }

    let page = page.push(filter_bar(state)).push(grid(state));

    column![
        nav,
        scrollable(page)
            .id(scroll_id(Route::Gallery))
            .height(Length::Fill),
    ]
    .into()
}

/// One button per filter, the active one highlighted
fn filter_bar(state: &FilterState) -> Row<'_, Message> {
    state.filters().iter().fold(Row::new().spacing(16), |bar, filter| {
        let style = if state.is_active(&filter.id) {
            button::primary
        } else {
            button::secondary
        };

        bar.push(
            button(text(filter.button_label()).size(16))
                .on_press(Message::FilterSelected(filter.id.clone()))
                .padding([12, 32])
                .style(style),
        )
    })
}

fn grid(state: &FilterState) -> Element<'_, Message> {
    if state.visible_len() == 0 {
        return text("Aucune photo dans cette catégorie").size(18).color(MUTED).into();
    }

    let cards: Vec<Element<'_, Message>> = state.visible_items().map(photo_card).collect();

    Wrap::with_elements(cards)
        .spacing(GRID_GAP)
        .line_spacing(GRID_GAP)
        .into()
}

/// Card with the photo (or a placeholder for remote images) and its caption
fn photo_card(photo: &PhotoRecord) -> Element<'_, Message> {
    let picture: Element<'_, Message> = if photo.is_remote() {
        container(
            column![
                text("📷").size(48),
                text(photo.display_src()).size(11).color(MUTED),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
        .padding(16)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::from_rgb(0.91, 0.93, 0.94))),
            ..container::Style::default()
        })
        .into()
    } else {
        image(image::Handle::from_path(&photo.src))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into()
    };

    let caption = column![
        text(&photo.title).size(22).color(INK),
        text(&photo.description).size(15).color(MUTED),
    ]
    .spacing(6)
    .padding(16);

    container(column![picture, caption])
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(photo.display_height.to_pixels()))
        .style(container::rounded_box)
        .into()
}
