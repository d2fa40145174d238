/*
 * Responsibility
 * - API 共通の失敗ボディ { success: false, msg } の定義
 * - アプリ共通の AppError 定義と IntoResponse 実装
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// 認証ゲートが返す共通の拒否ボディ
///
/// status code は設定せず、既定の 200 のまま返す（既知の挙動）。
/// 変えるなら IntoResponse をここで変えるだけ。
#[derive(Debug, Serialize)]
pub struct ApiReject {
    pub success: bool,
    pub msg: String,
}

impl ApiReject {
    pub fn msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: msg.into(),
        }
    }
}

impl IntoResponse for ApiReject {
    fn into_response(self) -> Response {
        // status は敢えて設定しない
        Json(self).into_response()
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            // extractor が SessionCtx を見つけられなかった場合など
            // (ゲートが掛かっていない route に extractor を置いたミス)
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
        };

        (status, Json(ApiReject::msg(msg))).into_response()
    }
}
