use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Receipt;
use super::value_objects::ReceiptId;

/// Storage port for submitted receipts. Receipts are immutable once stored:
/// there is no update or delete.
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Stores the receipt under a freshly generated identifier and returns it.
    async fn put(&self, receipt: Receipt) -> Result<ReceiptId, RepositoryError>;
    /// Returns `None` for identifiers that were never issued.
    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>, RepositoryError>;
}
