//! Fitness oracle
//!
//! This module wraps the trained win-probability predictor and turns it
//! into the composite fitness both search engines optimize.

pub mod benchmarks;
pub mod features;
pub mod fitness;
pub mod predictor;

pub mod prelude {
    pub use super::benchmarks::*;
    pub use super::features::*;
    pub use super::fitness::*;
    pub use super::predictor::*;
}
