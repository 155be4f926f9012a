/*
 * Responsibility
 * - Handler から見える「API key 提示済みコンテキスト」の型
 * - middleware が抽出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - 鍵の照合 (lookup) はこのリポジトリの外の責務
 */

use crate::services::auth::ApiKey;

/// API key を提示したリクエストに付与されるコンテキスト
///
/// - `api_key` は Debug で中身を出さない
/// - ログやレスポンスには `fingerprint()` だけを使う
#[derive(Debug, Clone)]
pub struct ApiKeyCtx {
    pub api_key: ApiKey,
}

impl ApiKeyCtx {
    pub fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    pub fn fingerprint(&self) -> String {
        self.api_key.fingerprint()
    }
}
