// src/server/routes.rs

pub mod health {
    use rocket::{get, serde::json::Json};
    use serde_json::{json, Value};

    #[get("/health")]
    pub async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "service": "creator-scout-api"
        }))
    }

    #[get("/")]
    pub async fn index() -> Json<Value> {
        Json(json!({
            "name": "Creator Scout API",
            "version": "0.1.0",
            "description": "API for scanning creator profiles and drafting outreach",
            "endpoints": {
                "health": "/api/health",
                "scan": "/api/scan",
                "outreach": "/api/outreach"
            }
        }))
    }
}
