//! Golden vectors for the OAuth 1.0a HMAC-SHA1 signer.

use anyhow::Result;
use http::header::AUTHORIZATION;
use http::Method;
use oauthsig_core::time::from_unix_timestamp;
use oauthsig_core::{Context, ParamValue, Signer, SigningRequest};
use oauthsig_oauth1::{
    authorization, normalize_params, normalized_param_string, sign, signature_base_string,
    signing_key, Credential, RequestSigner, SigningContext, StaticCredentialProvider, StaticNonce,
};
use pretty_assertions::assert_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
    v.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_example_com_photos_vector() {
    init();

    let cred = Credential::new("ck", "cs", "at", "ats");
    let signing = SigningContext::new(1318622958, "kllo9940pd9333jh");
    let params = pairs(&[("file", "vacation.jpg")]);

    let normalized = normalized_param_string(&normalize_params(&params, &cred, &signing));
    assert_eq!(
        normalized,
        "file=vacation.jpg&oauth_consumer_key=ck&oauth_nonce=kllo9940pd9333jh&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1318622958&oauth_token=at&oauth_version=1.0"
    );

    let base = signature_base_string(&Method::GET, "http://example.com/photos", &normalized);
    assert_eq!(
        base,
        "GET&http%3A%2F%2Fexample.com%2Fphotos&file%3Dvacation.jpg%26oauth_consumer_key%3Dck%26oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_token%3Dat%26oauth_version%3D1.0"
    );

    let key = signing_key(&cred);
    assert_eq!(key, "cs&ats");
    assert_eq!(sign(&base, &key), "xooCKmPPhQupGk5xUJFXc/2Eag4=");

    assert_eq!(
        authorization(
            &cred,
            &signing,
            &Method::GET,
            "http://example.com",
            "http://example.com/photos",
            &params,
        ),
        "OAuth realm=\"http://example.com\", oauth_consumer_key=\"ck\", oauth_token=\"at\", oauth_signature_method=\"HMAC-SHA1\", oauth_signature=\"xooCKmPPhQupGk5xUJFXc%2F2Eag4%3D\", oauth_timestamp=\"1318622958\", oauth_nonce=\"kllo9940pd9333jh\", oauth_version=\"1.0\""
    );
}

// Example from RFC 5849 section 1.2 / OAuth Core 1.0 appendix A.5.
#[test]
fn test_photos_example_net_vector() {
    init();

    let cred = Credential::new(
        "dpf43f3p2l4k3l03",
        "kd94hf93k423kf44",
        "nnch734d00sl2jdk",
        "pfkkdhi9sl3r4s00",
    );
    let signing = SigningContext::new(1191242096, "kllo9940pd9333jh");
    let params = pairs(&[("size", "original"), ("file", "vacation.jpg")]);

    let normalized = normalized_param_string(&normalize_params(&params, &cred, &signing));
    let base = signature_base_string(&Method::GET, "http://photos.example.net/photos", &normalized);
    assert_eq!(
        base,
        "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal"
    );
    assert_eq!(sign(&base, &signing_key(&cred)), "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
}

#[tokio::test]
async fn test_signer_post_with_mixed_values_and_empty_token() -> Result<()> {
    init();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("ck", "cs", "", ""),
        RequestSigner::new()
            .with_time(from_unix_timestamp(1318622958)?)
            .with_nonce(StaticNonce::new("abcdefghijklmnop")),
    );

    let params: Vec<(&str, ParamValue)> = vec![
        ("title", "Hello World!".into()),
        ("tags", "ä/ö".into()),
        ("album_id", 42i64.into()),
        ("rating", 4.5.into()),
    ];
    let mut req = SigningRequest::new(
        Method::POST,
        "http://example.com",
        "/api/photo/update",
        params,
    )?;
    signer.sign(&mut req).await?;

    assert_eq!(
        req.params,
        pairs(&[
            ("album_id", "42"),
            ("rating", "4.5"),
            ("tags", "ä/ö"),
            ("title", "Hello World!"),
        ])
    );
    assert_eq!(
        req.headers.get(AUTHORIZATION).map(|v| v.to_str()).transpose()?,
        Some("OAuth realm=\"http://example.com\", oauth_consumer_key=\"ck\", oauth_token=\"\", oauth_signature_method=\"HMAC-SHA1\", oauth_signature=\"cK%2BHcrOnOzJcDdQF6cmGOf8nrDo%3D\", oauth_timestamp=\"1318622958\", oauth_nonce=\"abcdefghijklmnop\", oauth_version=\"1.0\"")
    );
    Ok(())
}

#[tokio::test]
async fn test_signer_get_without_params() -> Result<()> {
    init();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("ck", "cs", "at", "ats"),
        RequestSigner::new()
            .with_time(from_unix_timestamp(1318622958)?)
            .with_nonce(StaticNonce::new("kllo9940pd9333jh")),
    );

    let mut req = SigningRequest::new(
        Method::GET,
        "http://example.com",
        "/api/echo",
        Vec::<(String, String)>::new(),
    )?;
    signer.sign(&mut req).await?;

    let value = req
        .headers
        .get(AUTHORIZATION)
        .expect("authorization must be set")
        .to_str()?;
    assert!(value.contains("oauth_signature=\"SqOjsCQ96NvWtUwzh7bbx8WTicc%3D\""));
    assert!(req.params.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_signer_rejects_invalid_credential() -> Result<()> {
    init();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("ck", "", "at", "ats"),
        RequestSigner::new(),
    );

    let mut req = SigningRequest::new(
        Method::GET,
        "http://example.com",
        "/photos",
        [("file", "vacation.jpg")],
    )?;
    let err = signer
        .sign(&mut req)
        .await
        .expect_err("empty consumer secret must be rejected");
    assert!(err.is_credential_error());
    assert!(req.headers.get(AUTHORIZATION).is_none());
    Ok(())
}

#[tokio::test]
async fn test_signer_concurrent_calls_use_fresh_nonces() -> Result<()> {
    init();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("ck", "cs", "at", "ats"),
        RequestSigner::new(),
    );

    let mut handles = Vec::new();
    for i in 0..16i64 {
        let signer = signer.clone();
        handles.push(tokio::spawn(async move {
            let mut req = SigningRequest::new(
                Method::GET,
                "http://example.com",
                "/photos",
                [("page", i)],
            )?;
            signer.sign(&mut req).await?;
            let value = req
                .headers
                .get(AUTHORIZATION)
                .expect("authorization must be set")
                .to_str()?
                .to_string();
            anyhow::Ok(value)
        }));
    }

    let mut nonces = std::collections::HashSet::new();
    for handle in handles {
        let value = handle.await??;
        let nonce = value
            .split("oauth_nonce=\"")
            .nth(1)
            .and_then(|s| s.split('"').next())
            .expect("nonce must be present")
            .to_string();
        assert_eq!(nonce.len(), 16);
        nonces.insert(nonce);
    }
    assert_eq!(nonces.len(), 16);
    Ok(())
}
