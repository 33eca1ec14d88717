use iced::widget::scrollable::{self, RelativeOffset, Viewport};
use iced::{Element, Size, Task, Theme};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod router;
mod state;
mod ui;

use config::Config;
use router::Route;
use state::catalog::Catalog;
use state::gallery::FilterState;
use state::scroll::ScrollWatcher;

/// The page currently mounted, with its view-local state
#[derive(Debug)]
enum Page {
    Home(ScrollWatcher),
    /// Filter state lives only as long as the gallery is shown
    Gallery(FilterState),
}

/// Main application state
struct PhotoPortfolio {
    /// Photos and filters shown by the gallery
    catalog: Catalog,
    page: Page,
    scroll_threshold: f32,
    /// Problem to surface on the gallery page (e.g. a bad catalog file)
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User followed a navigation link
    Navigate(Route),
    /// The home page scrolled
    HomeScrolled(Viewport),
    /// User clicked a gallery filter button
    FilterSelected(String),
    /// Background catalog load finished
    CatalogLoaded(Result<Catalog, String>),
}

impl PhotoPortfolio {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let catalog = Catalog::builtin();
        info!(
            "🎨 Photo portfolio starting with {} photos in {} categories",
            catalog.photos().len(),
            catalog.filters().len()
        );

        let mut app = PhotoPortfolio {
            catalog,
            page: Page::Home(ScrollWatcher::new(config.scroll_threshold)),
            scroll_threshold: config.scroll_threshold,
            status: None,
        };
        app.mount(config.start_route());

        let task = match config.catalog_path {
            Some(path) => {
                info!("📁 Loading catalog from {}", path.display());
                Task::perform(
                    async move { Catalog::load(path).await.map_err(|err| err.to_string()) },
                    Message::CatalogLoaded,
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                if route != self.route() {
                    info!("🧭 {} -> {}", self.route().path(), route.path());
                    self.mount(route);

                    // A freshly mounted page starts at the top
                    return scrollable::snap_to(ui::scroll_id(route), RelativeOffset::START);
                }
            }
            Message::HomeScrolled(viewport) => {
                if let Page::Home(watcher) = &mut self.page {
                    if watcher.observe(viewport.absolute_offset().y) {
                        debug!("Header scrolled: {}", watcher.is_scrolled());
                    }
                }
            }
            Message::FilterSelected(filter_id) => {
                if let Page::Gallery(filter) = &mut self.page {
                    let change = filter.select_filter(&filter_id);
                    if change.switched() {
                        debug!(
                            "🔎 Filter {} -> {}: {} of {} photos",
                            change.previous,
                            change.current,
                            change.visible_count,
                            filter.master_len()
                        );
                    }
                }
            }
            Message::CatalogLoaded(Ok(catalog)) => {
                info!("✅ Catalog loaded: {} photos", catalog.photos().len());
                self.catalog = catalog;
                self.status = None;

                // A mounted gallery starts over on the new photos
                if let Page::Gallery(_) = self.page {
                    self.mount(Route::Gallery);
                }
            }
            Message::CatalogLoaded(Err(err)) => {
                error!("❌ Catalog not loaded, keeping built-in photos: {}", err);
                self.status = Some(format!("Catalogue non chargé : {}", err));
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        match &self.page {
            Page::Home(watcher) => ui::home::view(watcher),
            Page::Gallery(filter) => ui::gallery::view(filter, self.status.as_deref()),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn route(&self) -> Route {
        match self.page {
            Page::Home(_) => Route::Home,
            Page::Gallery(_) => Route::Gallery,
        }
    }

    /// Replace the current page with a fresh instance of `route`
    fn mount(&mut self, route: Route) {
        self.page = match route {
            Route::Home => Page::Home(ScrollWatcher::new(self.scroll_threshold)),
            Route::Gallery => match self.catalog.filter_state() {
                Ok(filter) => Page::Gallery(filter),
                Err(err) => {
                    // Catalogs are validated when built
                    error!("❌ Cannot open gallery: {}", err);
                    return;
                }
            },
        };
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        warn!("⚠️  Ignoring settings file: {}", err);
        Config::default()
    });

    iced::application(
        "Sarah Martin Photography",
        PhotoPortfolio::update,
        PhotoPortfolio::view,
    )
    .theme(PhotoPortfolio::theme)
    .window_size(Size::new(1280.0, 900.0))
    .centered()
    .run_with(move || PhotoPortfolio::new(config))
}
