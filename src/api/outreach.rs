// src/api/outreach.rs
use crate::api::scan::ApiResponse;
use crate::outreach::{OutreachMessage, OutreachRequest};
use crate::server::ServerState;
use rocket::{post, serde::json::Json, State};

#[post("/outreach", data = "<request>")]
pub async fn compose_outreach(
    state: &State<ServerState>,
    request: Json<OutreachRequest>,
) -> Json<ApiResponse<OutreachMessage>> {
    let message = state.composer.compose(&request).await;
    Json(ApiResponse::success(message))
}
