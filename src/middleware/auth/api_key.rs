//! `Authorization: ApiKey <token>` 抽出 → ApiKeyCtx を extensions に入れる
//!
//! - 抽出ロジック自体は `services::auth::api_key` (HTTP 非依存の core)
//! - ここは失敗時のログと 401 への変換、extensions への受け渡しだけを持つ
//! - 鍵の照合 (DB / KV lookup) はこのサービスの責務外

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::{ApiKey, extract_api_key};

/// API key を必須にしたい Router に middleware を適用する。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/credential", get(credential));
/// let protected = middleware::auth::api_key::apply(protected);
/// ```
pub fn apply(router: Router) -> Router {
    // route_layer: マッチしなかったパスは 401 ではなく 404 のまま
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let token = match extract_api_key(req.headers()) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                method = %req.method(),
                path = %req.uri().path(),
                "api key rejected"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(ApiKey::new(token));
    tracing::debug!(fingerprint = %ctx.fingerprint(), "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
