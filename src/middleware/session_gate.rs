/*
 * Responsibility
 * - セッション Cookie の検証 (Cookie 抽出 → 検証 → 拒否)
 * - 成功時に SessionCtx を request extensions に載せる
 * - 認可 (Authorization) は handler/service 側の責務
 */
//! session token（Cookie の JWT）検証 → SessionCtx を extensions に入れる
//!
//! - Cookie 名は Config 由来（AppState 経由）
//! - 検証ロジックは services::session::SessionVerifier 側
//! - 拒否レスポンスは { success: false, msg } のまま status を変えない
//!   （詳細は error.rs の ApiReject を参照）

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::api::v1::extractors::SessionCtx;
use crate::error::ApiReject;
use crate::services::session::Verdict;
use crate::state::AppState;

const MSG_NO_TOKEN: &str = "Unauthorized, login again!";
const MSG_INVALID_PAYLOAD: &str = "Invalid token payload";

/// 認証を掛けたい Router に gate を適用する。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::session_gate::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, session_middleware))
}

async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = session_cookie(req.headers(), state.cookie_name());

    match state.sessions.verify(token.as_deref()) {
        Verdict::Authenticated(id) => {
            // middleware → extractor への受け渡し
            req.extensions_mut().insert(SessionCtx::new(id));
            next.run(req).await
        }
        Verdict::Unauthenticated => ApiReject::msg(MSG_NO_TOKEN).into_response(),
        Verdict::InvalidPayload => ApiReject::msg(MSG_INVALID_PAYLOAD).into_response(),
        Verdict::VerificationFailed(msg) => {
            tracing::warn!(error = %msg, "session token verification failed");
            ApiReject::msg(msg).into_response()
        }
    }
}

/// Cookie ヘッダから名前一致の値を取り出す。
/// JWT は cookie-safe な文字しか含まないので decode は不要。
fn session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k.trim() == name).then(|| v.trim().to_string())
    })
}
