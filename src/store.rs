//! In-process table of generated meshes.

use crate::mesh::Mesh;
use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Inner {
    meshes: HashMap<Uuid, Arc<Mesh>>,
    /// Insertion order, oldest first. Only kept when a capacity is set.
    order: VecDeque<Uuid>,
}

/// Meshes keyed by id, shared across request handlers.
///
/// Entries are never mutated. Without a capacity limit they live for the
/// lifetime of the process; with one, the oldest entry is evicted to make
/// room for a new one.
#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    inner: Arc<RwLock<Inner>>,
    capacity: Option<NonZeroUsize>,
}

impl ModelStore {
    /// Unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding at most `capacity` meshes.
    pub fn with_capacity_limit(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                meshes: HashMap::with_capacity(capacity.get()),
                order: VecDeque::with_capacity(capacity.get()),
            })),
            capacity: Some(capacity),
        }
    }

    pub const fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Register `mesh` under its id and hand back the shared handle.
    pub async fn insert(&self, mesh: Mesh) -> Arc<Mesh> {
        let mesh = Arc::new(mesh);
        let mut inner = self.inner.write().await;

        if let Some(capacity) = self.capacity {
            if !inner.meshes.contains_key(&mesh.id) {
                while inner.meshes.len() >= capacity.get() {
                    let Some(oldest) = inner.order.pop_front() else {
                        break;
                    };
                    inner.meshes.remove(&oldest);
                    tracing::debug!(id = %oldest, "evicted mesh from store");
                }
                inner.order.push_back(mesh.id);
            }
        }

        inner.meshes.insert(mesh.id, Arc::clone(&mesh));
        mesh
    }

    pub async fn get(&self, id: &Uuid) -> Option<Arc<Mesh>> {
        self.inner.read().await.meshes.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.meshes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_get() {
        let store = ModelStore::new();
        let mesh = store.insert(Mesh::unit_cube()).await;
        let found = store.get(&mesh.id).await.expect("mesh should be stored");
        assert!(Arc::ptr_eq(&mesh, &found));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_id_is_absent() {
        let store = ModelStore::new();
        assert!(store.is_empty().await);
        assert!(store.get(&Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn capacity_evicts_oldest() {
        let store = ModelStore::with_capacity_limit(NonZeroUsize::new(2).unwrap());
        let first = store.insert(Mesh::unit_cube()).await;
        let second = store.insert(Mesh::unit_cube()).await;
        let third = store.insert(Mesh::unit_cube()).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(&first.id).await.is_none());
        assert!(store.get(&second.id).await.is_some());
        assert!(store.get(&third.id).await.is_some());
    }

    #[tokio::test]
    async fn reinserting_same_id_does_not_evict() {
        let store = ModelStore::with_capacity_limit(NonZeroUsize::new(2).unwrap());
        let first = store.insert(Mesh::unit_cube()).await;
        let second = store.insert(Mesh::unit_cube()).await;
        store.insert((*first).clone()).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(&second.id).await.is_some());
    }
}
