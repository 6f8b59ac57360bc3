//! Bulk loading of Open Library style author and work dumps.
//!
//! Each dump line is parsed into a loosely typed record, mapped onto a catalog
//! entity and upserted by id. Work records pick up the display names of the
//! authors they reference from whatever the author pass stored.
#![allow(clippy::missing_docs_in_private_items)]

pub mod dump;
pub mod mapping;
pub mod pipeline;
pub mod record;
pub mod resolver;
pub mod store;

pub use pipeline::{DumpLoader, LoadReport, LoaderConfig, LoaderTuning, PassReport};
pub use store::CatalogStore;
