use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use super::data::{CategoryFilter, DisplayHeight, PhotoRecord};
use super::gallery::FilterState;
use crate::error::{Error, Result};

/// The gallery's content: every photo and every selectable filter.
///
/// A catalog is built once at startup and shared read-only with each
/// gallery view that gets mounted.
#[derive(Debug, Clone)]
pub struct Catalog {
    photos: Arc<[PhotoRecord]>,
    filters: Arc<[CategoryFilter]>,
}

/// On-disk catalog layout
#[derive(Deserialize)]
struct CatalogFile {
    photos: Vec<PhotoRecord>,
    filters: Vec<CategoryFilter>,
}

impl Catalog {
    /// Build a catalog and check that a gallery can be mounted on it
    pub fn new(photos: Vec<PhotoRecord>, filters: Vec<CategoryFilter>) -> Result<Self> {
        let catalog = Catalog {
            photos: photos.into(),
            filters: filters.into(),
        };
        catalog.filter_state()?;
        Ok(catalog)
    }

    /// Parse a catalog from JSON
    ///
    /// Expected shape: `{ "photos": [...], "filters": [...] }`, where photo
    /// `height` may be a string like `"500px"` or a number.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.photos, file.filters)
    }

    /// Read and parse a catalog file without blocking the UI thread
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&json)
    }

    /// Fresh filter state for a newly mounted gallery, starting at "all"
    pub fn filter_state(&self) -> Result<FilterState> {
        FilterState::new(self.photos.clone(), self.filters.clone())
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn filters(&self) -> &[CategoryFilter] {
        &self.filters
    }

    /// The portfolio's own photos
    pub fn builtin() -> Self {
        let filters = vec![
            CategoryFilter::new("all", "Tous", "🎨"),
            CategoryFilter::new("wedding", "Mariages", "💑"),
            CategoryFilter::new("portrait", "Portraits", "👤"),
            CategoryFilter::new("landscape", "Paysages", "🏔️"),
            CategoryFilter::new("event", "Événements", "🎉"),
        ];

        let photos = BUILTIN_PHOTOS
            .iter()
            .map(|&(id, unsplash_id, title, category, description, height)| PhotoRecord {
                id,
                src: format!("https://images.unsplash.com/photo-{}", unsplash_id),
                title: title.to_string(),
                category: category.to_string(),
                description: description.to_string(),
                display_height: DisplayHeight::Css(height.to_string()),
            })
            .collect::<Vec<_>>();

        // Literal data, checked by the tests below
        Catalog {
            photos: photos.into(),
            filters: filters.into(),
        }
    }
}

/// (id, unsplash photo id, title, category, description, height)
const BUILTIN_PHOTOS: [(i64, &str, &str, &str, &str, &str); 12] = [
    (1, "1583939003579-730e3918a45a", "Mariage en Provence", "wedding", "Une célébration intime dans les champs de lavande", "500px"),
    (2, "1504703395950-b89145a5425b", "Portrait Urbain", "portrait", "Séance photo dans les rues de Paris", "400px"),
    (3, "1464822759023-fed622ff2c3b", "Alpes Françaises", "landscape", "Coucher de soleil sur les montagnes", "600px"),
    (4, "1519741497674-611481863552", "Gala de Charité", "event", "Soirée de gala au profit des enfants", "450px"),
    (5, "1519225421980-715cb0215aed", "Portrait Nature", "portrait", "Séance photo en extérieur", "550px"),
    (6, "1505932794465-147d1f1b2c97", "Mariage Élégant", "wedding", "Cérémonie au château", "500px"),
    (7, "1492684223066-81342ee5ff30", "Mariage sur la Plage", "wedding", "Cérémonie au coucher du soleil", "450px"),
    (8, "1469594292607-7bd90f8d3ba4", "Paysage Montagneux", "landscape", "Vue panoramique des Alpes", "500px"),
    (9, "1531747056595-07f6cbbe10ad", "Portrait Artistique", "portrait", "Portrait en studio noir et blanc", "600px"),
    (10, "1511795409834-ef04bbd61622", "Festival de Musique", "event", "Concert en plein air", "450px"),
    (11, "1470071459604-3b5ec3a7fe05", "Lever de Soleil", "landscape", "Paysage matinal dans les Pyrénées", "550px"),
    (12, "1511285560929-80b456fea0bc", "Gala de Mode", "event", "Défilé de haute couture", "500px"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.photos().len(), 12);
        assert_eq!(catalog.filters().len(), 5);
        assert!(catalog.filter_state().is_ok());
    }

    #[test]
    fn test_builtin_weddings() {
        let mut state = Catalog::builtin().filter_state().unwrap();

        state.select_filter("wedding");
        let ids: Vec<i64> = state.visible_items().map(|photo| photo.id).collect();
        assert_eq!(ids, vec![1, 6, 7]);

        state.select_filter("all");
        assert_eq!(state.visible_len(), 12);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "photos": [
                { "id": 1, "src": "a.jpg", "title": "A", "category": "portrait",
                  "description": "first", "height": "450px" },
                { "id": 2, "src": "b.jpg", "title": "B", "category": "event",
                  "description": "second", "height": 300 },
                { "id": 3, "src": "c.jpg", "title": "C", "category": "event",
                  "description": "third" }
            ],
            "filters": [
                { "id": "all", "label": "All", "icon": "*" },
                { "id": "event", "label": "Events" }
            ]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.photos()[0].display_height.to_pixels(), 450.0);
        assert_eq!(catalog.photos()[1].display_height.to_pixels(), 300.0);
        assert_eq!(catalog.photos()[2].display_height, DisplayHeight::default());
        assert_eq!(catalog.filters()[1].icon, "");
    }

    #[test]
    fn test_from_json_without_all_filter() {
        let json = r#"{ "photos": [], "filters": [ { "id": "event", "label": "Events" } ] }"#;
        assert!(matches!(Catalog::from_json(json), Err(Error::MissingAllFilter)));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(Catalog::from_json("{ \"photos\": "), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let result = runtime.block_on(Catalog::load("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
