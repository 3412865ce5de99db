use std::str::FromStr;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method, Uri};
use log::debug;
use oauthsig_oauth1::{percent_encode, Config, Credential, DefaultCredentialProvider, RequestSigner};

use crate::{Context, Error, ParamValue, Result, Signer, SigningRequest};

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Client signs OAuth 1.0a requests and sends them through [`Context`].
///
/// - `GET` carries the params in the query string.
/// - `POST` carries them as a form body.
///
/// Both return the response body as text, whatever the status code is.
#[derive(Debug, Clone)]
pub struct Client {
    host: String,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a new client from config.
    ///
    /// `config.host` is required and must carry a scheme, like
    /// `http://example.com`. Credentials are resolved for every request, from
    /// the config first and then from the environment of `ctx`.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        Self::with_request_signer(ctx, config, RequestSigner::new())
    }

    /// Create a new client with a customized request signer.
    ///
    /// This is mostly useful to pin time and nonce in tests.
    pub fn with_request_signer(
        ctx: Context,
        config: Config,
        request_signer: RequestSigner,
    ) -> Result<Self> {
        let host = match config.host.as_deref() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(Error::config_invalid("host is required")),
        };

        SigningRequest::check_host(&host)?;

        let signer = Signer::new(
            ctx,
            DefaultCredentialProvider::new(config.into()),
            request_signer,
        );
        Ok(Self { host, signer })
    }

    /// The configured host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Send a signed `GET` request and return the response body.
    pub async fn get<K, V>(
        &self,
        endpoint: &str,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<String>
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let req = self.signed_request(Method::GET, endpoint, params).await?;

        let mut url = req.base_url();
        if !req.params.is_empty() {
            url.push('?');
            url.push_str(&SigningRequest::params_to_string(
                &req.params,
                percent_encode,
            ));
        }

        self.send(req, url, Bytes::new()).await
    }

    /// Send a signed `POST` request with a form body and return the response body.
    pub async fn post<K, V>(
        &self,
        endpoint: &str,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<String>
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut req = self.signed_request(Method::POST, endpoint, params).await?;

        let body = SigningRequest::params_to_string(&req.params, percent_encode);
        req.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));

        let url = req.base_url();
        self.send(req, url, Bytes::from(body)).await
    }

    async fn signed_request<K, V>(
        &self,
        method: Method,
        endpoint: &str,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<SigningRequest>
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut req = SigningRequest::new(method, &self.host, endpoint, params)?;
        self.signer.sign(&mut req).await?;
        Ok(req)
    }

    async fn send(&self, req: SigningRequest, url: String, body: Bytes) -> Result<String> {
        debug!("sending {} request to {url}", req.method);

        let mut http_req = http::Request::new(body);
        *http_req.method_mut() = req.method;
        *http_req.uri_mut() = Uri::from_str(&url)
            .map_err(|e| Error::request_invalid(format!("invalid url {url:?}")).with_source(e))?;
        *http_req.headers_mut() = req.headers;

        let resp = self.signer.context().http_send_as_string(http_req).await?;
        debug!("got response with status {}", resp.status());
        Ok(resp.into_body())
    }
}
