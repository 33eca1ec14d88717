/// User interface module
///
/// Views are plain functions of the application state:
/// - `home.rs` - landing page with the scroll-aware header
/// - `gallery.rs` - filter buttons and the photo card grid
///
/// Shared pieces (palette, navigation links) live here.

pub mod gallery;
pub mod home;

use iced::widget::{button, row, scrollable, text, Row};
use iced::{Color, Element};

use crate::router::Route;
use crate::Message;

/// Dark slate used for headings and the active filter
pub const INK: Color = Color::from_rgb(0.173, 0.243, 0.314);
/// Muted grey for secondary text
pub const MUTED: Color = Color::from_rgb(0.424, 0.459, 0.490);
/// Sage accent from the home page
pub const ACCENT: Color = Color::from_rgb(0.659, 0.776, 0.624);

/// One text button per route, coloured with `color`
pub fn nav_links<'a>(current: Route, color: Color) -> Row<'a, Message> {
    Route::all()
        .into_iter()
        .fold(row![].spacing(24), |links, route| {
            let label = text(route.label())
                .size(18)
                .color(if route == current { ACCENT } else { color });

            links.push(
                button(label)
                    .on_press(Message::Navigate(route))
                    .style(button::text),
            )
        })
}

/// Section heading
pub fn heading<'a>(title: &'a str) -> Element<'a, Message> {
    text(title).size(36).color(INK).into()
}

/// Scroll container id for a page, so each page keeps its own offset
pub fn scroll_id(route: Route) -> scrollable::Id {
    scrollable::Id::new(route.path())
}
