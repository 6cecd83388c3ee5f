pub mod holdings_store;
pub mod sample;
