/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The built-in and file-based photo catalog (catalog.rs)
/// - Gallery filtering (gallery.rs)
/// - Home page scroll tracking (scroll.rs)

pub mod catalog;
pub mod data;
pub mod gallery;
pub mod scroll;
