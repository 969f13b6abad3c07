//! Append-only in-memory booking store.

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::record::BookingRecord;

/// Append-only log of booking records behind a single writer lock.
///
/// Readers take shared access; the only write path is `append`, so records
/// keep their insertion order and are never mutated in place.
#[derive(Debug, Default)]
pub struct BookingStore {
    inner: RwLock<Vec<BookingRecord>>,
}

impl BookingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its identifier.
    pub async fn append(&self, record: BookingRecord) -> Uuid {
        let id = record.id();
        let mut guard = self.inner.write().await;
        guard.push(record);
        info!(booking_id = %id, total = guard.len(), "booking recorded");
        id
    }

    /// Returns all records in append order.
    #[must_use]
    pub async fn all(&self) -> Vec<BookingRecord> {
        self.inner.read().await.clone()
    }

    /// Returns the record with the given identifier, if present.
    #[must_use]
    pub async fn get(&self, id: Uuid) -> Option<BookingRecord> {
        self.inner
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns `true` when no record has been appended yet.
    #[must_use]
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
