/// The two top-level views of the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Gallery,
}

impl Route {
    /// Resolve a URL-style path. Anything other than `/` and `/gallery`
    /// has no view.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        match normalized {
            "/" => Some(Route::Home),
            "/gallery" => Some(Route::Gallery),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Gallery => "/gallery",
        }
    }

    /// Navigation link text
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Accueil",
            Route::Gallery => "Galerie",
        }
    }

    pub fn all() -> [Self; 2] {
        [Route::Home, Route::Gallery]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/gallery"), Some(Route::Gallery));
        assert_eq!(Route::from_path("/gallery/"), Some(Route::Gallery));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/about"), None);
        assert_eq!(Route::from_path("/gallery/wedding"), None);
        assert_eq!(Route::from_path("gallery"), None);
        // Empty input is treated as the root
        assert_eq!(Route::from_path(""), Some(Route::Home));
    }

    #[test]
    fn test_path_round_trip() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
