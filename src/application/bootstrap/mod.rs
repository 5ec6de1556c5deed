pub mod persistence;
pub mod services;

pub use persistence::PersistenceBootstrap;
pub use services::ServicesBootstrap;
