/// Gallery filter state
///
/// Owns the photo list and the set of category filters, tracks which
/// filter is active and derives the photos that should be shown.
/// The visible list is recomputed from scratch on every selection.

use std::collections::HashSet;
use std::sync::Arc;

use super::data::{CategoryFilter, PhotoRecord, ALL_FILTER};
use crate::error::{Error, Result};

/// Filter state for one mounted gallery view
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Master photo list, in display order
    photos: Arc<[PhotoRecord]>,
    /// Selectable filters, in button order
    filters: Arc<[CategoryFilter]>,
    /// Currently selected filter id
    active_filter: String,
    /// Indices into `photos` of the visible records, in master order
    visible: Vec<usize>,
}

/// Describes a filter selection, for the caller to report or react to
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChange {
    pub previous: String,
    pub current: String,
    pub visible_count: usize,
}

impl FilterChange {
    /// True when the selection switched to a different filter
    pub fn switched(&self) -> bool {
        self.previous != self.current
    }
}

impl FilterState {
    /// Create the state for a freshly mounted gallery.
    ///
    /// The filter set must contain exactly one `all` entry and no duplicate
    /// ids. Photos may not use `all` as their category and must have unique
    /// ids. The initial filter is `all`, so every photo is visible.
    pub fn new(
        photos: impl Into<Arc<[PhotoRecord]>>,
        filters: impl Into<Arc<[CategoryFilter]>>,
    ) -> Result<Self> {
        let photos = photos.into();
        let filters = filters.into();

        validate(&photos, &filters)?;

        let mut state = FilterState {
            photos,
            filters,
            active_filter: ALL_FILTER.to_string(),
            visible: Vec::new(),
        };
        state.recompute();

        Ok(state)
    }

    /// Select a filter and recompute the visible photos.
    ///
    /// An id that matches no photo category (including ids that aren't in
    /// the filter set) leaves the gallery empty rather than failing.
    pub fn select_filter(&mut self, filter_id: &str) -> FilterChange {
        let previous = std::mem::replace(&mut self.active_filter, filter_id.to_string());
        self.recompute();

        FilterChange {
            previous,
            current: self.active_filter.clone(),
            visible_count: self.visible.len(),
        }
    }

    /// Currently selected filter id
    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Whether `filter_id` is the selected filter
    pub fn is_active(&self, filter_id: &str) -> bool {
        self.active_filter == filter_id
    }

    /// Photos matching the active filter, in master list order
    pub fn visible_items(&self) -> impl Iterator<Item = &PhotoRecord> + '_ {
        self.visible.iter().map(move |&index| &self.photos[index])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// All selectable filters, in button order
    pub fn filters(&self) -> &[CategoryFilter] {
        &self.filters
    }

    pub fn master_len(&self) -> usize {
        self.photos.len()
    }

    fn recompute(&mut self) {
        let active = self.active_filter.as_str();

        self.visible = if active == ALL_FILTER {
            (0..self.photos.len()).collect()
        } else {
            self.photos
                .iter()
                .enumerate()
                .filter(|(_, photo)| photo.category == active)
                .map(|(index, _)| index)
                .collect()
        };
    }
}

/// Reject catalogs that would make the gallery ambiguous
fn validate(photos: &[PhotoRecord], filters: &[CategoryFilter]) -> Result<()> {
    let mut filter_ids = HashSet::new();
    for filter in filters {
        if !filter_ids.insert(filter.id.as_str()) {
            return Err(Error::DuplicateFilter(filter.id.clone()));
        }
    }
    if !filters.iter().any(CategoryFilter::is_all) {
        return Err(Error::MissingAllFilter);
    }

    let mut photo_ids = HashSet::new();
    for photo in photos {
        if photo.category == ALL_FILTER {
            return Err(Error::ReservedCategory { photo_id: photo.id });
        }
        if !photo_ids.insert(photo.id) {
            return Err(Error::DuplicatePhotoId(photo.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::DisplayHeight;

    const CATEGORIES: [&str; 4] = ["wedding", "portrait", "landscape", "event"];

    fn photo(id: i64, category: &str) -> PhotoRecord {
        PhotoRecord {
            id,
            src: format!("photos/{}.jpg", id),
            title: format!("Photo {}", id),
            category: category.to_string(),
            description: String::new(),
            display_height: DisplayHeight::default(),
        }
    }

    fn filters() -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::new("all", "All", "")];
        for category in CATEGORIES {
            filters.push(CategoryFilter::new(category, category, ""));
        }
        filters
    }

    /// Twelve photos cycling through the categories, three of each
    fn twelve_photos() -> Vec<PhotoRecord> {
        (1..=12)
            .map(|id| photo(id, CATEGORIES[(id as usize - 1) % CATEGORIES.len()]))
            .collect()
    }

    fn visible_ids(state: &FilterState) -> Vec<i64> {
        state.visible_items().map(|photo| photo.id).collect()
    }

    #[test]
    fn test_starts_with_everything_visible() {
        let photos = twelve_photos();
        let state = FilterState::new(photos.clone(), filters()).unwrap();

        assert_eq!(state.active_filter(), ALL_FILTER);
        assert!(state.visible_items().eq(photos.iter()));
    }

    #[test]
    fn test_empty_photo_list() {
        let mut state = FilterState::new(Vec::<PhotoRecord>::new(), filters()).unwrap();
        assert_eq!(state.visible_len(), 0);

        state.select_filter("wedding");
        assert_eq!(state.visible_len(), 0);
    }

    #[test]
    fn test_wedding_then_all() {
        let mut state = FilterState::new(twelve_photos(), filters()).unwrap();

        let change = state.select_filter("wedding");
        assert_eq!(visible_ids(&state), vec![1, 5, 9]);
        assert_eq!(state.active_filter(), "wedding");
        assert_eq!(change.previous, "all");
        assert_eq!(change.visible_count, 3);
        assert!(change.switched());

        state.select_filter("all");
        assert_eq!(visible_ids(&state), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_has_no_false_positives_or_negatives() {
        let photos = twelve_photos();
        let mut state = FilterState::new(photos.clone(), filters()).unwrap();

        for category in CATEGORIES {
            state.select_filter(category);
            assert!(state.visible_items().all(|photo| photo.category == category));

            let expected = photos.iter().filter(|photo| photo.category == category).count();
            assert_eq!(state.visible_len(), expected);
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let photos = vec![
            photo(30, "event"),
            photo(4, "portrait"),
            photo(17, "event"),
            photo(2, "event"),
        ];
        let mut state = FilterState::new(photos, filters()).unwrap();

        state.select_filter("event");
        assert_eq!(visible_ids(&state), vec![30, 17, 2]);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let mut state = FilterState::new(twelve_photos(), filters()).unwrap();

        state.select_filter("portrait");
        let first = visible_ids(&state);
        let change = state.select_filter("portrait");

        assert_eq!(visible_ids(&state), first);
        assert!(!change.switched());
    }

    #[test]
    fn test_unknown_filter_shows_nothing() {
        let mut state = FilterState::new(twelve_photos(), filters()).unwrap();

        let change = state.select_filter("nonexistent-category");
        assert_eq!(state.visible_len(), 0);
        assert_eq!(change.visible_count, 0);
        assert_eq!(state.active_filter(), "nonexistent-category");
    }

    #[test]
    fn test_filter_without_photos_is_kept() {
        let photos = vec![photo(1, "wedding"), photo(2, "portrait")];
        let mut state = FilterState::new(photos, filters()).unwrap();

        assert!(state.filters().iter().any(|filter| filter.id == "landscape"));
        state.select_filter("landscape");
        assert_eq!(state.visible_len(), 0);
        assert!(state.is_active("landscape"));
    }

    #[test]
    fn test_missing_all_filter_is_rejected() {
        let filters = vec![CategoryFilter::new("wedding", "Weddings", "")];
        let result = FilterState::new(twelve_photos(), filters);
        assert!(matches!(result, Err(Error::MissingAllFilter)));
    }

    #[test]
    fn test_duplicate_all_filter_is_rejected() {
        let mut filters = filters();
        filters.push(CategoryFilter::new("all", "Everything", ""));
        let result = FilterState::new(twelve_photos(), filters);
        assert!(matches!(result, Err(Error::DuplicateFilter(id)) if id == "all"));
    }

    #[test]
    fn test_reserved_category_is_rejected() {
        let photos = vec![photo(1, "wedding"), photo(2, "all")];
        let result = FilterState::new(photos, filters());
        assert!(matches!(result, Err(Error::ReservedCategory { photo_id: 2 })));
    }

    #[test]
    fn test_duplicate_photo_id_is_rejected() {
        let photos = vec![photo(7, "wedding"), photo(7, "event")];
        let result = FilterState::new(photos, filters());
        assert!(matches!(result, Err(Error::DuplicatePhotoId(7))));
    }
}
