use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::receipt::model::Receipt;
use business::domain::receipt::repository::ReceiptRepository;
use business::domain::receipt::value_objects::ReceiptId;

/// Process-lifetime receipt store.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Receipt>>>` so concurrent request
/// handlers can share it. Nothing is evicted and nothing survives a restart.
#[derive(Default, Clone)]
pub struct InMemoryReceiptRepository {
    receipts: Arc<RwLock<HashMap<ReceiptId, Receipt>>>,
}

impl InMemoryReceiptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptRepository for InMemoryReceiptRepository {
    async fn put(&self, receipt: Receipt) -> Result<ReceiptId, RepositoryError> {
        let mut receipts = self.receipts.write().await;
        // v4 collisions are not expected; regenerate rather than overwrite
        let mut id = ReceiptId::generate();
        while receipts.contains_key(&id) {
            id = ReceiptId::generate();
        }
        receipts.insert(id.clone(), receipt);
        Ok(id)
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>, RepositoryError> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).cloned())
    }
}
