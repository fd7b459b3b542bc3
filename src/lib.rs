//! census-scatter: interactive census scatter plot.
//!
//! Plots state-level demographic attributes against health indicators and
//! lets the viewer swap the attribute behind each axis by clicking its labels.
//! Drawing goes through the [`render::Renderer`] trait so the same chart logic
//! drives headless, SVG and Cairo backends.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartSnapshot, ScatterChart, ScatterConfig};
pub use error::{ChartError, ChartResult};
