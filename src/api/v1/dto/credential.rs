use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub scheme: &'static str,
    pub fingerprint: String,
}
