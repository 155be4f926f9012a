/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - API key が必要な範囲 (route_layer) をここで決める
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{credential::credential, health::health};
use crate::middleware;

pub fn routes() -> Router {
    // /credential 以下だけ API key 必須。health は素通し
    let protected = Router::new().route("/credential", get(credential));
    let protected = middleware::auth::api_key::apply(protected);

    Router::new().route("/health", get(health)).merge(protected)
}
