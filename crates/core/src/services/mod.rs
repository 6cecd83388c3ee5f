pub mod allocation_service;
pub mod analytics_service;
pub mod holdings_service;
