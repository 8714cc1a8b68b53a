//! Value types shared across the pipeline.

pub mod character;
pub mod graph;
pub mod token;
