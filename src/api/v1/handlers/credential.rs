/*
 * Responsibility
 * - GET /api/v1/credential
 * - middleware が受理した API key の fingerprint を返す (鍵そのものは返さない)
 */
use axum::Json;

use crate::api::v1::dto::credential::CredentialResponse;
use crate::api::v1::extractors::ApiKeyCtxExtractor;
use crate::services::auth::API_KEY_SCHEME;

pub async fn credential(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<CredentialResponse> {
    Json(CredentialResponse {
        scheme: API_KEY_SCHEME,
        fingerprint: ctx.fingerprint(),
    })
}
