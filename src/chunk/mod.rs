//! Chunk types.
//!
//! - [`Chunk`] - One block read from a source, with its offset

mod data;

pub use data::Chunk;
