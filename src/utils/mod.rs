//! Shared utility functions.

pub mod time;
