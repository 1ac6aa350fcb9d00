//! In-memory profile storage with an optional size quota

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{ProfileStorage, StorageError, Write};

/// Process-local storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    /// Maximum total bytes of keys plus values
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects any batch pushing it past `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            values: Arc::default(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.values.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn size_of(values: &HashMap<String, String>) -> usize {
        values.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl ProfileStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn write_batch(&self, writes: &[Write<'_>]) -> Result<(), StorageError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());

        let mut next = values.clone();
        for (key, value) in writes {
            match value {
                Some(value) => {
                    next.insert((*key).to_string(), value.clone());
                }
                None => {
                    next.remove(*key);
                }
            }
        }

        if let Some(quota) = self.quota {
            let used = Self::size_of(&next);
            if used > quota {
                return Err(StorageError::QuotaExceeded { used, quota });
            }
        }

        *values = next;
        Ok(())
    }
}
