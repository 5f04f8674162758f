//! # Presence Storage 模块
//!
//! 维护"设备标识 → 历史记录"的映射与最近一次分类快照。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`presence.rs`)：`PresenceStore` 异步 Trait
//! 2. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 3. **实现层** (`in_memory/`)：进程内存实现，单把 `RwLock` 保护全部状态
//!
//! ## 记录状态机
//!
//! ```text
//! (首次出现) ──ingest──▶ Online ──sweep（超过离线阈值）──▶ Offline
//!                          ▲                                  │
//!                          └──────────────ingest──────────────┘
//! ```
//!
//! - 记录只增不删，`first_seen_ms` 创建后不再变化；
//! - ingest 与 sweep 的时间戳由调用方注入，存储本身不读取系统时钟；
//! - sweep 只改 `status`，不改 `last_seen_ms`、累计时长和连接方式。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use presence_storage::{InMemoryPresenceStore, PresenceStore};
//!
//! let store = InMemoryPresenceStore::new();
//! let snapshot = presence_classify::classify(["AA"], ["AA", "BB"]);
//! store.ingest(snapshot, 1_000).await?;
//! store.sweep_offline(40_000).await?;
//! let view = store.current_view().await?;
//! ```

pub mod error;
pub mod in_memory;
pub mod presence;

pub use error::*;
pub use presence::*;

pub use in_memory::InMemoryPresenceStore;
