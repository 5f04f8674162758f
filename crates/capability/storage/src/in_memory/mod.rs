//! 内存存储实现模块
//!
//! 进程内唯一的在线状态存储，生命周期与服务进程一致，不做持久化。
//!
//! 包含以下实现：
//! - PresenceStore: InMemoryPresenceStore

pub mod presence;

pub use presence::*;
