// src/api/scan.rs
use crate::page_source::ScanReport;
use crate::server::ServerState;
use rocket::{post, serde::json::Json, State};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

#[derive(Deserialize)]
pub struct ScanRequest {
    pub url: String,
}

#[post("/scan", data = "<request>")]
pub async fn scan_profile(
    state: &State<ServerState>,
    request: Json<ScanRequest>,
) -> Json<ApiResponse<ScanReport>> {
    if request.url.trim().is_empty() {
        return Json(ApiResponse::error("url must not be empty".to_string()));
    }

    // A page that cannot be fetched still yields a report with
    // success = false, so batch callers never see a 500 for a bad page.
    let report = state.scanner.scan(request.url.trim()).await;
    Json(ApiResponse::success(report))
}
