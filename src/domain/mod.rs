// Feature schema and typed records
pub mod housing;

// Model inputs and outputs
pub mod ml;

// Repository traits
pub mod repositories;

// Token verification capability
pub mod auth;

// Domain-specific error types
pub mod errors;
