//! In-process URL queue
//!
//! Same contract as the Redis queue, backed by a mutex-held bag. Used by
//! tests and single-process runs without a Redis instance.

use crate::queue::UrlQueue;
use crate::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// URL queue held in process memory.
#[derive(Default)]
pub struct MemoryUrlQueue {
    bag: Mutex<Vec<String>>,
}

impl MemoryUrlQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlQueue for MemoryUrlQueue {
    async fn enqueue(&self, urls: &[String]) -> Result<()> {
        let mut bag = self.bag.lock().expect("queue mutex poisoned");
        bag.extend_from_slice(urls);
        Ok(())
    }

    async fn drain_all(&self) -> Result<Vec<String>> {
        let bag = self.bag.lock().expect("queue mutex poisoned");
        Ok(bag.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut bag = self.bag.lock().expect("queue mutex poisoned");
        bag.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_append_merges_batches() {
        let queue = MemoryUrlQueue::new();
        queue
            .enqueue(&["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        queue.enqueue(&["c".to_string()]).await.unwrap();

        let drained: HashSet<String> = queue.drain_all().await.unwrap().into_iter().collect();
        let expected: HashSet<String> =
            ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(drained, expected);
    }

    #[tokio::test]
    async fn test_clear_empties_bag() {
        let queue = MemoryUrlQueue::new();
        queue.enqueue(&["a".to_string()]).await.unwrap();
        queue.drain_all().await.unwrap();
        queue.clear().await.unwrap();
        assert!(queue.drain_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_redelivery_without_clear() {
        // Crash simulation: drain without clear must redeliver the same set.
        let queue = MemoryUrlQueue::new();
        queue
            .enqueue(&["a".to_string(), "b".to_string()])
            .await
            .unwrap();

        let first = queue.drain_all().await.unwrap();
        let second = queue.drain_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        // "Dedup" is in the name only; the bag does not enforce uniqueness.
        let queue = MemoryUrlQueue::new();
        queue.enqueue(&["a".to_string()]).await.unwrap();
        queue.enqueue(&["a".to_string()]).await.unwrap();
        assert_eq!(queue.drain_all().await.unwrap().len(), 2);
    }
}
