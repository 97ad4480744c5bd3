// Application layer - Use cases and ports
pub mod scheduler;
pub mod snapshot_store;
pub mod solar_service;
pub mod token_manager;
pub mod vendor_gateway;

#[cfg(test)]
pub mod fake_gateway;
