pub mod feature_registry;
pub mod prediction;

pub use prediction::{PredictionResult, PredictionSource};
