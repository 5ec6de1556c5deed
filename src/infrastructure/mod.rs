pub mod auth;
pub mod persistence;
pub mod repositories;

pub use repositories::InMemoryPredictionRepository;
