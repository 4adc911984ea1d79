use tokio::sync::RwLock;

/// An ordered in-process sequence with explicit read/write operations.
///
/// This is the storage primitive behind every marketplace collection.
/// Insertion order is preserved: filters return subsequences of the source
/// order and nothing is ever deleted.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    items: RwLock<Vec<T>>,
}

// Manual impl: an empty collection needs no `T: Default`.
impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Clone> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Clones the full sequence in source order.
    pub async fn snapshot(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn insert(&self, item: T) {
        self.items.write().await.push(item);
    }

    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.read().await.iter().find(|item| predicate(item)).cloned()
    }

    /// Subsequence of items satisfying the predicate, order preserved.
    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .read()
            .await
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Applies `mutate` to the first item matching the predicate and returns
    /// the updated item, or `None` when nothing matched.
    pub async fn update_first<P, M>(&self, predicate: P, mutate: M) -> Option<T>
    where
        P: Fn(&T) -> bool,
        M: FnOnce(&mut T),
    {
        let mut items = self.items.write().await;
        let item = items.iter_mut().find(|item| predicate(item))?;
        mutate(item);
        Some(item.clone())
    }
}
