use std::fmt;
use std::str::FromStr;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::{Error, Result};

/// ParamValue is the value of a request parameter.
///
/// Values are a closed set so that every variant has exactly one canonical
/// text form, which is what gets signed and sent.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Text, used verbatim.
    Text(String),
    /// Integer, rendered in decimal.
    Integer(i64),
    /// Decimal, rendered in its shortest round-trip form (`4.5`, `1` for `1.0`).
    Decimal(f64),
}

impl ParamValue {
    /// Render the value into its canonical text form.
    ///
    /// Returns an error for NaN or infinite decimals which have no text form
    /// a server would agree on.
    pub fn to_text(&self) -> Result<String> {
        match self {
            ParamValue::Text(v) => Ok(v.clone()),
            ParamValue::Integer(v) => Ok(v.to_string()),
            ParamValue::Decimal(v) if v.is_finite() => Ok(v.to_string()),
            ParamValue::Decimal(v) => Err(Error::request_invalid(format!(
                "decimal parameter value {v} is not finite"
            ))),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(v) => f.write_str(v),
            ParamValue::Integer(v) => write!(f, "{v}"),
            ParamValue::Decimal(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Text(v.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Integer(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Integer(v.into())
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Integer(v.into())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Decimal(v)
    }
}

/// Signing context for request.
///
/// `params` holds the request parameters rendered to text. They are NOT part of
/// `path`: a signer folds them into the signature and the transport serializes
/// them into the query string or the form body.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, without query.
    pub path: String,
    /// Request parameters.
    pub params: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Check that `host` is usable as the base of a signing request.
    ///
    /// Accepts exactly the hosts [`SigningRequest::new`] accepts.
    pub fn check_host(host: &str) -> Result<()> {
        parse_host(host).map(|_| ())
    }

    /// Build a signing request from host, endpoint and parameters.
    ///
    /// - `host` must carry a scheme, like `http://example.com`.
    /// - `endpoint` must start with `/` and carry no query or fragment.
    pub fn new<K, V>(
        method: Method,
        host: &str,
        endpoint: &str,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let (scheme, authority, host_path) = parse_host(host)?;

        if !endpoint.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "endpoint {endpoint:?} must start with '/'"
            )));
        }
        if endpoint.contains(['?', '#']) {
            return Err(Error::request_invalid(format!(
                "endpoint {endpoint:?} must not contain query or fragment, pass parameters instead"
            )));
        }

        let path = format!("{}{}", host_path.trim_end_matches('/'), endpoint);
        PathAndQuery::from_str(&path).map_err(|e| {
            Error::request_invalid(format!("invalid endpoint {endpoint:?}")).with_source(e)
        })?;

        let params = params
            .into_iter()
            .map(|(k, v)| {
                let value: ParamValue = v.into();
                Ok((k.into(), value.to_text()?))
            })
            .collect::<Result<Vec<(String, String)>>>()?;

        Ok(SigningRequest {
            method,
            scheme,
            authority,
            path,
            params,
            headers: HeaderMap::new(),
        })
    }

    /// Scheme and authority, like `http://example.com`.
    pub fn host(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }

    /// Scheme, authority and path, without any query.
    pub fn base_url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.authority, self.path)
    }

    /// Convert params to string in their current order, encoding keys and values.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a=b&c=d"
    /// ```
    pub fn params_to_string(
        params: &[(String, String)],
        encode: impl Fn(&str) -> String,
    ) -> String {
        let mut s = String::with_capacity(16);

        for (idx, (k, v)) in params.iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }

            s.push_str(&encode(k));
            s.push('=');
            s.push_str(&encode(v));
        }

        s
    }
}

/// Split `host` into scheme, authority and path.
///
/// The authority ends up in the realm and the signed url, so userinfo is refused.
fn parse_host(host: &str) -> Result<(Scheme, Authority, String)> {
    let uri = Uri::from_str(host)
        .map_err(|e| Error::config_invalid(format!("invalid host {host:?}")).with_source(e))?;
    let (Some(scheme), Some(authority)) = (uri.scheme(), uri.authority()) else {
        return Err(Error::config_invalid(format!(
            "host {host:?} must contain scheme and authority"
        )));
    };
    if authority.as_str().contains('@') {
        return Err(Error::config_invalid(
            "host must not contain userinfo, pass credentials through config instead",
        ));
    }
    if uri.query().is_some() {
        return Err(Error::config_invalid(format!(
            "host {host:?} must not contain query"
        )));
    }

    Ok((scheme.clone(), authority.clone(), uri.path().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_param_value_text() -> Result<()> {
        assert_eq!(ParamValue::from("vacation.jpg").to_text()?, "vacation.jpg");
        assert_eq!(ParamValue::from(42i64).to_text()?, "42");
        assert_eq!(ParamValue::from(-7i64).to_text()?, "-7");
        assert_eq!(ParamValue::from(4.5).to_text()?, "4.5");
        assert_eq!(ParamValue::from(1.0).to_text()?, "1");
        assert_eq!(ParamValue::from(0.1).to_text()?, "0.1");
        Ok(())
    }

    #[test]
    fn test_param_value_rejects_non_finite() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ParamValue::from(v).to_text().expect_err("must be rejected");
            assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        }
    }

    #[test]
    fn test_new_signing_request() -> Result<()> {
        let req = SigningRequest::new(
            Method::GET,
            "http://example.com",
            "/photos",
            [("file", ParamValue::from("vacation.jpg")), ("size", 3i64.into())],
        )?;

        assert_eq!(req.host(), "http://example.com");
        assert_eq!(req.base_url(), "http://example.com/photos");
        assert_eq!(
            req.params,
            vec![
                ("file".to_string(), "vacation.jpg".to_string()),
                ("size".to_string(), "3".to_string()),
            ]
        );
        assert!(req.headers.is_empty());
        Ok(())
    }

    #[test]
    fn test_new_signing_request_keeps_host_path_and_port() -> Result<()> {
        let req = SigningRequest::new(
            Method::POST,
            "https://video.example.com:8443/api/",
            "/photo/list",
            Vec::<(String, String)>::new(),
        )?;

        assert_eq!(req.host(), "https://video.example.com:8443");
        assert_eq!(req.base_url(), "https://video.example.com:8443/api/photo/list");
        Ok(())
    }

    #[test]
    fn test_new_signing_request_invalid_host() {
        let no_params = Vec::<(String, String)>::new;
        for host in [
            "",
            "example.com",
            "http://exa mple.com",
            "http://example.com?a=b",
            "http://user:pw@example.com",
            "http://user@example.com/api",
        ] {
            let err = SigningRequest::new(Method::GET, host, "/photos", no_params())
                .expect_err("host must be rejected");
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid, "host: {host:?}");

            let err = SigningRequest::check_host(host).expect_err("host must be rejected");
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid, "host: {host:?}");
        }
    }

    #[test]
    fn test_new_signing_request_invalid_endpoint() {
        let no_params = Vec::<(String, String)>::new;
        for endpoint in ["photos", "/photos?file=a.jpg", "/photos#top"] {
            let err = SigningRequest::new(Method::GET, "http://example.com", endpoint, no_params())
                .expect_err("endpoint must be rejected");
            assert_eq!(err.kind(), ErrorKind::RequestInvalid, "endpoint: {endpoint:?}");
        }
    }

    #[test]
    fn test_params_to_string() {
        let params = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "x y".to_string()),
        ];

        assert_eq!(
            SigningRequest::params_to_string(&params, |s| s.replace(' ', "%20")),
            "b=2&a=x%20y"
        );
        assert_eq!(SigningRequest::params_to_string(&[], |s| s.to_string()), "");
    }
}
