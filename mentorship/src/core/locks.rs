//! Per-entity lock table
//!
//! An assignment locks exactly the mentors and students it touches before it
//! reads anything. Keys are always acquired in sorted order, so two
//! operations over overlapping sets cannot deadlock.

use shared::{MentorId, StudentId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKey {
    Mentor(MentorId),
    Student(StudentId),
}

/// Guards held for the duration of one operation
#[derive(Debug)]
pub struct LockSet {
    _guards: Vec<OwnedMutexGuard<()>>,
}

#[derive(Debug, Clone, Default)]
pub struct EntityLocks {
    table: Arc<Mutex<HashMap<EntityKey, Arc<Mutex<()>>>>>,
}

impl EntityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock every key in `keys`, waiting for current holders
    pub async fn acquire(&self, keys: impl IntoIterator<Item = EntityKey>) -> LockSet {
        let mut keys: Vec<EntityKey> = keys.into_iter().collect();
        keys.sort();
        keys.dedup();

        let mutexes: Vec<Arc<Mutex<()>>> = {
            let mut table = self.table.lock().await;
            // drop entries nobody is holding or waiting on
            table.retain(|_, mutex| Arc::strong_count(mutex) > 1);
            keys.iter()
                .map(|key| table.entry(*key).or_default().clone())
                .collect()
        };

        let mut guards = Vec::with_capacity(mutexes.len());
        for mutex in mutexes {
            guards.push(mutex.lock_owned().await);
        }

        LockSet { _guards: guards }
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.table.lock().await.len()
    }
}
