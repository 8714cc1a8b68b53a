//! Charnet — weighted character networks from annotated literary text.
//!
//! Consumes the output of an NLP co-reference pipeline (a per-token table
//! plus a resolved character roster, e.g. bookNLP output) and builds an
//! undirected, weighted social network: one vertex per character, one edge
//! per pair of characters sharing a context window (sentence or paragraph),
//! with optional averaged sentiment polarity on the edges.

pub mod core;
pub mod io;
pub mod schema;
