use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};
use crate::domain::receipt::value_objects::ReceiptId;

pub struct ProcessReceiptUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProcessReceiptUseCase for ProcessReceiptUseCaseImpl {
    async fn execute(&self, params: ProcessReceiptParams) -> Result<ReceiptId, ReceiptError> {
        self.logger.info(&format!(
            "Processing receipt from {} with {} items",
            params.receipt.retailer,
            params.receipt.items.len()
        ));

        let id = self.repository.put(params.receipt).await?;

        self.logger
            .info(&format!("Processed receipt with id: {}", id));
        Ok(id)
    }
}
