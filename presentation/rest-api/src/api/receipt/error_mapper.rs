use poem::http::StatusCode;
use poem_openapi::payload::PlainText;

use business::domain::receipt::errors::ReceiptError;

use crate::api::error::IntoErrorResponse;

pub const RECEIPT_NOT_FOUND: &str = "Receipt not found";

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, PlainText<String>) {
        let (status, message) = match &self {
            ReceiptError::NotFound => (StatusCode::NOT_FOUND, RECEIPT_NOT_FOUND),
            ReceiptError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository.persistence")
            }
        };

        (status, PlainText(message.to_string()))
    }
}
