#![feature(int_roundings)]

pub mod common;
pub mod engine;
pub mod math;
pub mod plan;
pub mod series;
pub mod spec;

pub use common::errors::IndicatorError;
pub use engine::engine::{IndicatorBatch, IndicatorEngine, IndicatorOutput};
pub use series::bar::{Bar, PriceSeries};
