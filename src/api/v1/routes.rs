/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - ここに載る route は全て認証 gate の内側 (適用は app.rs 側)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::session::current_session;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/session", get(current_session))
}
