// Domain layer - Core types and pure aggregation logic
pub mod credentials;
pub mod energy;
pub mod summary;
pub mod token;
