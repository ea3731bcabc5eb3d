//! Infrastructure: ports and the adapters behind them.

pub mod clock;
pub mod config;
pub mod memory_store;
pub mod ports;
pub mod storage_urls;
pub mod telemetry;
