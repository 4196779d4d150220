//! Filesystem utilities for airbrush.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
