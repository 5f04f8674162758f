//! 存储层错误类型

/// 在线状态存储错误。
///
/// 存储没有业务层面的失败；唯一可能的错误是持锁线程 panic 导致的锁中毒。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("presence state lock poisoned during {operation}")]
    LockPoisoned { operation: &'static str },
}

impl StorageError {
    pub fn lock_poisoned(operation: &'static str) -> Self {
        Self::LockPoisoned { operation }
    }
}
