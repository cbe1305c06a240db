mod engine;
mod engine_config;
mod pie_model;
mod session;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use pie_model::{PieModel, WedgeSlice};
pub use session::ChartSession;
