//! geoclock-rs: Earth's geological history on a 24-hour clock.
//!
//! This crate renders a fixed educational dataset (geological eras and
//! events mapped onto a conceptual 24-hour day) as a pie chart with a
//! radial annotation overlay. The core stays deterministic and
//! backend-agnostic; drawing backends and the GTK embedding are
//! feature-gated.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig, ChartSession};
pub use error::{ClockError, ClockResult};
