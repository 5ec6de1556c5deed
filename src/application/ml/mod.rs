pub mod adapter;
pub mod fallback;
pub mod predictor;
pub mod smartcore_predictor;

pub use adapter::PredictionAdapter;
pub use predictor::PricePredictor;
pub use smartcore_predictor::SmartCorePredictor;
