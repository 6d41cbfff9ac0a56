//! Core types for qubit spectroscopy response analysis.
//!
//! This crate is intentionally small and purely numeric. It holds the
//! validated response grid plus the power-axis helpers derived from it,
//! and does *not* depend on any concrete detection pipeline or rendering
//! backend.

mod grid;
mod logger;

pub use grid::{GridError, ResponseGrid};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::init_with_level;
