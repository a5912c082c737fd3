//! Filesystem helpers for writing prompt documents and expanded output.

pub mod atomic;

pub use atomic::{atomic_write, write_text};
