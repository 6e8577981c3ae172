//! Parse "Keep a Changelog" documents into versions and categories, and
//! answer list / get / merge queries against them.
//!
//! The pipeline runs leaves first: [`links::extract_links`] blanks out
//! reference-link definitions, [`versions::index_versions`] cuts the body into
//! version windows, and [`categories::merge_categories`] regroups selected
//! versions by `###` category. [`Changelog`] bundles the three.

pub mod categories;
pub mod document;
pub mod error;
pub mod lexer;
pub mod links;
pub mod release;
pub mod select;
pub mod types;
pub mod versions;
pub mod window;

pub use categories::{CANONICAL_CATEGORIES, CategoryMap};
pub use document::Changelog;
pub use error::Error;
pub use select::Selection;
pub use types::{ContentType, LineKind, UNRELEASED, Version};
