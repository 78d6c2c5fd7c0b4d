use axum::{routing::post, Json, Router};
use serde::Serialize;

pub const DEPLOY_MESSAGE: &str = "Contract deployment endpoint";
pub const INVEST_MESSAGE: &str = "Investment processing endpoint";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/deploy", post(deploy_contract))
        .route("/invest", post(process_investment))
}

pub async fn deploy_contract() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: DEPLOY_MESSAGE,
    })
}

pub async fn process_investment() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: INVEST_MESSAGE,
    })
}
