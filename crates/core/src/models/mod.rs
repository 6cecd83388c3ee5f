pub mod allocation;
pub mod analytics;
pub mod holding;
pub mod performance;
