use std::sync::Arc;

use logger::TracingLogger;
use persistence::receipt::repository::InMemoryReceiptRepository;

use business::application::receipt::get_points::GetReceiptPointsUseCaseImpl;
use business::application::receipt::process::ProcessReceiptUseCaseImpl;

use crate::api::receipt::routes::ReceiptApi;

pub struct DependencyContainer {
    pub receipt_api: ReceiptApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let receipt_repository = Arc::new(InMemoryReceiptRepository::new());

        // Receipt use cases
        let process_use_case = Arc::new(ProcessReceiptUseCaseImpl {
            repository: receipt_repository.clone(),
            logger: logger.clone(),
        });
        let get_points_use_case = Arc::new(GetReceiptPointsUseCaseImpl {
            repository: receipt_repository,
            logger,
        });

        let receipt_api = ReceiptApi::new(process_use_case, get_points_use_case);

        Self { receipt_api }
    }
}
