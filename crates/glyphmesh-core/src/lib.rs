//! Glyphmesh Core
//!
//! This crate contains the shared utilities for the glyphmesh text renderer.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
