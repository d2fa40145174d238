/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::session::SessionVerifier;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionVerifier>,
    cookie_name: Arc<str>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionVerifier>, cookie_name: impl Into<Arc<str>>) -> Self {
        Self {
            sessions,
            cookie_name: cookie_name.into(),
        }
    }

    /// セッショントークンを運ぶ Cookie 名
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}
