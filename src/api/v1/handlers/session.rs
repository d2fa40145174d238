/*
 * Responsibility
 * - GET /session: 認証済みアイデンティティの echo
 * - gate → extractor の配線を通す、保護対象 route の最小例
 */
use axum::{Json, response::IntoResponse};
use serde_json::json;

use crate::api::v1::extractors::SessionCtxExtractor;

pub async fn current_session(SessionCtxExtractor(ctx): SessionCtxExtractor) -> impl IntoResponse {
    Json(json!({ "success": true, "user": { "id": ctx.id } }))
}
