use oauthsig_core::{Context, OsEnv};
use oauthsig_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

/// Create a context that reads the OS environment and sends requests with
/// reqwest.
pub fn default_context() -> Context {
    Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::new(Client::new()))
}
