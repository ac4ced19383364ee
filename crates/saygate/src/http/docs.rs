//! OpenAPI document served under `/api-docs`

use utoipa::OpenApi;
use utoipa::openapi::server::ServerBuilder;

use super::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "saygate",
        description = "Relays a keyword to a serverless function and returns its response"
    ),
    paths(super::routes::say),
    components(schemas(ErrorResponse)),
    tags((name = "say", description = "Keyword relay"))
)]
pub struct ApiDoc;

/// Build the document with a server entry pointing at the local listener.
pub fn api_doc(port: u16) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![
        ServerBuilder::new()
            .url(format!("http://localhost:{}", port))
            .description(Some("Local server"))
            .build(),
    ]);
    doc
}
