use axum::response::Response;
use serde::Serialize;
use tracing::instrument;

use crate::extractors::flash::Flash;

/// The home page carries nothing but pending flash messages.
#[derive(Serialize, utoipa::ToSchema)]
pub struct HomePage {}

#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    operation_id = "home",
    summary = "Home page",
    description = "Landing page of every write redirect. Returns the pending flash messages, if any.",
    responses(
        (status = 200, description = "Home page", body = HomePage),
    ),
)]
#[instrument(skip(flash))]
pub async fn index(flash: Flash) -> Response {
    flash.render(HomePage {})
}
