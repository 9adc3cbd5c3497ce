//! 本地存储封装模块
//!
//! `KeyValueStorage` 抽象出字符串键值存储，
//! 浏览器中由 `web_sys::Storage` (LocalStorage) 实现，
//! 原生目标与测试中使用内存实现。

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// 存储操作错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// 无法获取 window 或 LocalStorage（隐私模式、被禁用等）
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove key `{key}`: {reason}")]
    Remove { key: String, reason: String },
}

/// 字符串键值存储
pub trait KeyValueStorage {
    /// 读取键值；键不存在或存储不可用时返回 None
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Remove {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// 内存存储，用于原生目标和测试
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一个键值
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// 所有写操作都失败的存储（模拟配额耗尽）
    pub fn read_only() -> Self {
        Self {
            items: RefCell::default(),
            read_only: true,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Remove {
                key: key.to_string(),
                reason: "storage is read-only".to_string(),
            });
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("admin_token"), None);

        storage.set("admin_token", "abc").unwrap();
        assert_eq!(storage.get("admin_token").as_deref(), Some("abc"));

        storage.remove("admin_token").unwrap();
        assert!(!storage.contains("admin_token"));
    }

    #[test]
    fn read_only_storage_reports_key() {
        let storage = MemoryStorage::read_only();
        let err = storage.set("admin_token", "abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to write key `admin_token`: QuotaExceededError"
        );
        assert_eq!(storage.get("admin_token"), None);
    }
}
