// Raw request fields to typed features
pub mod coercion;

// Pipeline adapter, predictors and the fallback estimate
pub mod ml;

// Process-wide model handle
pub mod model_holder;

// Request orchestration
pub mod prediction_service;

// Startup wiring
pub mod bootstrap;
