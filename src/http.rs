use crate::error::StoreError;
use crate::render::render_index;
use crate::store::CounterStore;
use crate::view::handle_page_view;
use anyhow::anyhow;
use dropshot::endpoint;
use dropshot::ApiDescription;
use dropshot::ConfigDropshot;
use dropshot::HttpError;
use dropshot::HttpServerStarter;
use dropshot::RequestContext;
use http::header;
use http::Response;
use http::StatusCode;
use hyper::Body;
use slog::info;
use std::sync::Arc;

/// The server-wide context is just the counter store.
pub struct ServerContext {
    store: Arc<dyn CounterStore>,
}

impl ServerContext {
    fn new(store: Arc<dyn CounterStore>) -> ServerContext {
        ServerContext { store }
    }
}

struct ErrorWrap(anyhow::Error);
impl From<ErrorWrap> for HttpError {
    fn from(value: ErrorWrap) -> Self {
        let message = format!("{:#}", value.0);
        dropshot::HttpError {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error_code: None,
            external_message: message.clone(),
            internal_message: message,
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(value: StoreError) -> Self {
        let message = value.to_string();
        match value {
            StoreError::NotFound(_) => dropshot::HttpError {
                status_code: StatusCode::NOT_FOUND,
                error_code: Some(String::from("NotFound")),
                external_message: String::from("Not Found"),
                internal_message: message,
            },
            StoreError::Storage(error) => ErrorWrap(error).into(),
        }
    }
}

pub async fn create_dropshot_server(
    config_dropshot: ConfigDropshot,
    log: slog::Logger,
    store: Arc<dyn CounterStore>,
) -> anyhow::Result<dropshot::HttpServer<ServerContext>> {
    let mut api = ApiDescription::new();
    api.register(api_index)
        .map_err(|error| anyhow!("registering index endpoint: {}", error))?;

    let api_context = ServerContext::new(store);

    Ok(HttpServerStarter::new(&config_dropshot, api, api_context, &log)
        .map_err(|error| anyhow!("creating Dropshot server: {:#}", error))?
        .start())
}

/// Count this visit and render the index page.
#[endpoint {
    method = GET,
    path = "/",
}]
async fn api_index(
    rqctx: RequestContext<ServerContext>,
) -> Result<Response<Body>, HttpError> {
    let api_context = rqctx.context();
    let context =
        handle_page_view(&rqctx.log, api_context.store.as_ref()).await?;
    info!(rqctx.log, "page view";
        "visit_counter" => %context.visit_counter);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(render_index(&context)))
        .map_err(|error| ErrorWrap(anyhow!(error)).into())
}
