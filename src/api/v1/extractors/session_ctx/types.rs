/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - トークンの検証ロジックは middleware/services 側の責務
 * - ここは「型（契約）」として固定化する
 */

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `id` はログイン時にトークンへ埋め込まれたユーザー識別子
/// - 寿命は 1 リクエスト。永続化しない
#[derive(Debug, Clone)]
pub struct SessionCtx {
    pub id: String,
}

impl SessionCtx {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
