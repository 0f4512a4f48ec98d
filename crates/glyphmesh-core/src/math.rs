//! Vector math via SIMD-accelerated `glam` types.
//!
//! This module re-exports the [`glam`] crate, which provides high-performance
//! vector and matrix mathematics using SIMD instructions when available.
//! Glyph layout only needs 2D positions and pivots, so [`Vec2`] is the type
//! you will see throughout the workspace.
//!
//! # Examples
//!
//! ```
//! use glyphmesh_core::math::Vec2;
//!
//! let position = Vec2::new(10.0, 20.0);
//! let pivot = position + Vec2::new(5.0, 8.0);
//! assert_eq!(pivot, Vec2::new(15.0, 28.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::*;
