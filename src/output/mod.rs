//! Output module
//!
//! Builds the dataset document and persists it.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Sorting charts by recency
//! - Assembling the document with summary metadata
//! - Writing it atomically as pretty-printed JSON
//! - Summarising charts per category

mod writer;

pub use writer::{
    build_document, category_breakdown, read_document, sort_by_recency, write_document,
    OutputDocument, OutputMeta,
};
