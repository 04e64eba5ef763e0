use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Json, PlainText},
};

use business::domain::receipt::use_cases::get_points::{
    GetReceiptPointsParams, GetReceiptPointsUseCase,
};
use business::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};

use crate::api::error::IntoErrorResponse;
use crate::api::receipt::dto::{
    PointsResponseBody, ProcessReceiptRequest, ProcessReceiptResponseBody,
};
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    process_use_case: Arc<dyn ProcessReceiptUseCase>,
    get_points_use_case: Arc<dyn GetReceiptPointsUseCase>,
}

impl ReceiptApi {
    pub fn new(
        process_use_case: Arc<dyn ProcessReceiptUseCase>,
        get_points_use_case: Arc<dyn GetReceiptPointsUseCase>,
    ) -> Self {
        Self {
            process_use_case,
            get_points_use_case,
        }
    }
}

/// Receipt processing API
///
/// Endpoints for submitting receipts and querying the points they earn.
#[OpenApi]
impl ReceiptApi {
    /// Process a receipt
    ///
    /// Stores the receipt in memory and returns the identifier it was stored under.
    #[oai(path = "/receipts/process", method = "post", tag = "ApiTags::Receipts")]
    async fn process(&self, body: Json<ProcessReceiptRequest>) -> ProcessReceiptResponse {
        let params = ProcessReceiptParams {
            receipt: body.0.into(),
        };

        match self.process_use_case.execute(params).await {
            Ok(id) => ProcessReceiptResponse::Ok(Json(ProcessReceiptResponseBody {
                id: id.to_string(),
            })),
            Err(err) => {
                let (_status, text) = err.into_error_response();
                ProcessReceiptResponse::InternalError(text)
            }
        }
    }

    /// Get receipt points
    ///
    /// Calculates the points awarded to a previously processed receipt.
    #[oai(path = "/receipts/:id/points", method = "get", tag = "ApiTags::Receipts")]
    async fn get_points(&self, id: Path<String>) -> GetPointsResponse {
        let params = GetReceiptPointsParams { id: id.0.into() };

        match self.get_points_use_case.execute(params).await {
            Ok(points) => GetPointsResponse::Ok(Json(PointsResponseBody { points })),
            Err(err) => {
                let (status, text) = err.into_error_response();
                match status.as_u16() {
                    404 => GetPointsResponse::NotFound(text),
                    _ => GetPointsResponse::InternalError(text),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "decode_error")]
pub enum ProcessReceiptResponse {
    #[oai(status = 200)]
    Ok(Json<ProcessReceiptResponseBody>),
    /// The body could not be decoded; carries the decoder's message.
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}

fn decode_error(err: poem::Error) -> ProcessReceiptResponse {
    tracing::info!("Error decoding request body: {}", err);
    ProcessReceiptResponse::BadRequest(PlainText(err.to_string()))
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPointsResponse {
    #[oai(status = 200)]
    Ok(Json<PointsResponseBody>),
    #[oai(status = 404)]
    NotFound(PlainText<String>),
    #[oai(status = 500)]
    InternalError(PlainText<String>),
}
