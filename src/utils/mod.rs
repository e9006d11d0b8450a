//! Helpers around the core classifier
//!
//! This module provides:
//! - Batch rendering (history lists, parallel over rayon for large batches)
//! - History timestamp parsing and display formatting

/// Order-preserving batch rendering
pub mod batch;
/// History timestamps
pub mod timestamp;
