//! The aggregation pipeline: context grouping, attribute inference,
//! edge accumulation, and network assembly.

pub mod aggregate;
pub mod extractor;
pub mod gender;
pub mod grouper;
pub mod network;
pub mod sentiment;
