use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::points;
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::use_cases::get_points::{
    GetReceiptPointsParams, GetReceiptPointsUseCase,
};

pub struct GetReceiptPointsUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReceiptPointsUseCase for GetReceiptPointsUseCaseImpl {
    async fn execute(&self, params: GetReceiptPointsParams) -> Result<u64, ReceiptError> {
        self.logger
            .info(&format!("Fetching points for receipt id: {}", params.id));

        let Some(receipt) = self.repository.get(&params.id).await? else {
            self.logger
                .info(&format!("Receipt not found: {}", params.id));
            return Err(ReceiptError::NotFound);
        };

        let breakdown = points::breakdown(&receipt);
        for anomaly in &breakdown.anomalies {
            self.logger
                .debug(&format!("Receipt {}: {}, scored as 0", params.id, anomaly));
        }

        let total = breakdown.total();
        self.logger
            .info(&format!("Points for receipt id {}: {}", params.id, total));
        Ok(total)
    }
}
