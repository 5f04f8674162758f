//! Handlers 模块

pub mod dashboard;
pub mod devices;
pub mod health;
pub mod metrics;

pub use dashboard::*;
pub use devices::*;
pub use health::*;
pub use metrics::*;
