use poem::{
    Endpoint, EndpointExt, Request, Route, Server as PoemServer,
    http::{HeaderValue, Method, header},
    listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const PROCESS_RECEIPT_PATH: &str = "/receipts/process";

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container);
        tracing::info!("Server running at http://{}", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Routes plus middleware, without a listener.
    pub fn app(container: DependencyContainer) -> impl Endpoint {
        let api_service =
            OpenApiService::new(container.receipt_api, "Receipt Processor API", "0.1.0");
        Route::new()
            .nest("/", api_service)
            .before(treat_receipt_body_as_json)
            .with(Tracing)
    }
}

/// Receipt bodies are decoded as JSON whatever `Content-Type` the client sent.
async fn treat_receipt_body_as_json(mut req: Request) -> poem::Result<Request> {
    if *req.method() == Method::POST && req.uri().path() == PROCESS_RECEIPT_PATH {
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }
    Ok(req)
}
