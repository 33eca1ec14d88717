/// Shared data structures for the portfolio state
///
/// These structs represent the data model that flows between
/// the catalog and the UI layer.

use serde::{Deserialize, Serialize};

/// Filter id meaning "no category restriction"
pub const ALL_FILTER: &str = "all";

/// Card height used when a photo's height hint can't be read
pub const DEFAULT_CARD_HEIGHT: f32 = 400.0;

/// Query appended to remote image URLs when displayed
const REMOTE_IMAGE_QUERY: &str = "auto=format&fit=crop&w=800&q=80";

/// Represents a single photo in the gallery
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhotoRecord {
    /// Unique id, stable for the process lifetime
    pub id: i64,
    /// Image location: a URL or a local path
    pub src: String,
    pub title: String,
    /// Category tag (e.g. "wedding"); never "all"
    pub category: String,
    pub description: String,
    /// Layout hint for the card height
    #[serde(rename = "height", default)]
    pub display_height: DisplayHeight,
}

impl PhotoRecord {
    /// Whether `src` points to a remote resource
    pub fn is_remote(&self) -> bool {
        self.src.starts_with("http://") || self.src.starts_with("https://")
    }

    /// The source to display, with crop parameters added to remote URLs
    pub fn display_src(&self) -> String {
        if !self.is_remote() {
            return self.src.clone();
        }

        let separator = if self.src.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.src, separator, REMOTE_IMAGE_QUERY)
    }
}

/// Card height hint: either a CSS-like string ("500px") or a number of pixels
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DisplayHeight {
    Pixels(f32),
    Css(String),
}

impl Default for DisplayHeight {
    fn default() -> Self {
        DisplayHeight::Pixels(DEFAULT_CARD_HEIGHT)
    }
}

impl DisplayHeight {
    /// Resolve the hint to pixels, falling back to the default card height
    pub fn to_pixels(&self) -> f32 {
        let pixels = match self {
            DisplayHeight::Pixels(value) => Some(*value),
            DisplayHeight::Css(value) => {
                let trimmed = value.trim();
                trimmed
                    .strip_suffix("px")
                    .unwrap_or(trimmed)
                    .trim()
                    .parse::<f32>()
                    .ok()
            }
        };

        match pixels {
            Some(value) if value.is_finite() && value > 0.0 => value,
            _ => DEFAULT_CARD_HEIGHT,
        }
    }
}

/// A selectable gallery filter
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryFilter {
    /// Matches a `PhotoRecord::category`, or is `ALL_FILTER`
    pub id: String,
    pub label: String,
    /// Decorative icon shown before the label
    #[serde(default)]
    pub icon: String,
}

impl CategoryFilter {
    pub fn new(id: &str, label: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Whether this is the "no filter" entry
    pub fn is_all(&self) -> bool {
        self.id == ALL_FILTER
    }

    /// Text for the filter button, e.g. "💑 Mariages"
    pub fn button_label(&self) -> String {
        if self.icon.is_empty() {
            self.label.clone()
        } else {
            format!("{} {}", self.icon, self.label)
        }
    }
}
