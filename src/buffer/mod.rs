//! Line buffering for text-mode hashing.
//!
//! This module provides [`LineBuffer`], a growable byte window with explicit
//! read and scan cursors, and [`Lines`], the iterator that drains complete
//! lines out of it.

mod window;

pub use window::{LineBuffer, Lines};
