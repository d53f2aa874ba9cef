use std::cell::RefCell;

use async_trait::async_trait;

use super::request::ConsultationRequest;
use crate::SycarexError;

/// Outbound port to the table store holding consultation requests. The
/// store assigns `id`, `status` and the timestamps on insert.
#[async_trait(?Send)]
pub trait ConsultationStore {
    async fn insert(&self, request: &ConsultationRequest) -> Result<(), SycarexError>;
}

/// In-memory store backing native builds and tests.
#[derive(Default)]
pub struct MemoryStore {
    rows: RefCell<Vec<ConsultationRequest>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<ConsultationRequest> {
        self.rows.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl ConsultationStore for MemoryStore {
    async fn insert(&self, request: &ConsultationRequest) -> Result<(), SycarexError> {
        self.rows.borrow_mut().push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_stores_row_verbatim() {
        let store = MemoryStore::new();
        let request = ConsultationRequest::new(
            "Ada",
            "ada@example.com",
            "Need invoicing automation",
        );
        store.insert(&request).await.unwrap();
        assert_eq!(store.rows(), vec![request]);
    }

    #[tokio::test]
    async fn test_repeated_inserts_create_duplicate_rows() {
        // no idempotency key: resubmitting the same request is two rows
        let store = MemoryStore::new();
        let request = ConsultationRequest::new("Ada", "ada@example.com", "Automation");
        store.insert(&request).await.unwrap();
        store.insert(&request).await.unwrap();
        assert_eq!(store.len(), 2);
    }
}
