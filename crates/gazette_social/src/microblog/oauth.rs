//! OAuth 1.0a request signing (HMAC-SHA1).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use rand::Rng;
use rand::distributions::Alphanumeric;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

const NONCE_LEN: usize = 32;

/// Credential quadruple for signing requests on behalf of a single account.
#[derive(Debug, Clone)]
pub struct OAuth1Credentials {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_secret: String,
}

impl OAuth1Credentials {
    /// Creates a credential set from the consumer pair and access pair.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_secret: access_secret.into(),
        }
    }

    /// Build the `Authorization` header value for a request.
    ///
    /// `params` must contain every request parameter that participates in the
    /// signature (query and form-encoded body parameters alike).
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        rng: &mut impl Rng,
    ) -> String {
        let nonce: String = rng
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.authorization_header_at(method, url, params, &nonce, &timestamp)
    }

    fn authorization_header_at(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        nonce: &str,
        timestamp: &str,
    ) -> String {
        let oauth_params = [
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp),
            ("oauth_token", self.access_token.as_str()),
            ("oauth_version", "1.0"),
        ];

        let base = signature_base(method, url, params, &oauth_params);
        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(&self.access_secret)
        );
        let signature = sign(&signing_key, &base);

        let mut header_params: Vec<(&str, &str)> = oauth_params.to_vec();
        header_params.push(("oauth_signature", &signature));
        header_params.sort();

        let fields = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {}", fields)
    }
}

/// RFC 3986 percent-encoding: only unreserved characters pass through.
fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Signature base string: method, URL, and the sorted parameter string,
/// each encoded and joined with `&`.
fn signature_base(
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    oauth_params: &[(&str, &str)],
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .chain(oauth_params.iter())
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

fn sign(key: &str, base: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(base.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_encoding_follows_rfc_3986() {
        assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
        assert_eq!(percent_encode("An encoded string!"), "An%20encoded%20string%21");
        assert_eq!(percent_encode("Dogs, Cats & Mice"), "Dogs%2C%20Cats%20%26%20Mice");
        assert_eq!(percent_encode("~safe-chars_stay.put"), "~safe-chars_stay.put");
    }

    #[test]
    fn hmac_sha1_matches_known_vector() {
        // Standard test vector for HMAC-SHA1.
        let signature = sign("key", "The quick brown fox jumps over the lazy dog");
        assert_eq!(signature, "3nybhbi3iqa8ino29wqQcBydtNk=");
    }

    #[test]
    fn base_string_sorts_and_encodes_parameters() {
        let base = signature_base(
            "post",
            "https://api.twitter.com/1.1/statuses/update.json",
            &[("status", "Hello World")],
            &[("oauth_nonce", "abc"), ("oauth_version", "1.0")],
        );
        assert_eq!(
            base,
            "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json\
             &oauth_nonce%3Dabc%26oauth_version%3D1.0%26status%3DHello%2520World"
        );
    }

    #[test]
    fn header_contains_all_oauth_fields() {
        let creds = OAuth1Credentials::new("ck", "cs", "tok", "ts");
        let header = creds.authorization_header_at(
            "POST",
            "https://api.twitter.com/1.1/statuses/update.json",
            &[("status", "hi")],
            "nonce123",
            "1318622958",
        );
        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_consumer_key=\"ck\""));
        assert!(header.contains("oauth_nonce=\"nonce123\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.contains("oauth_timestamp=\"1318622958\""));
        assert!(header.contains("oauth_token=\"tok\""));
        assert!(header.contains("oauth_version=\"1.0\""));
        assert!(header.contains("oauth_signature=\""));
    }

    #[test]
    fn header_is_deterministic_for_fixed_nonce_and_timestamp() {
        let creds = OAuth1Credentials::new("ck", "cs", "tok", "ts");
        let a = creds.authorization_header_at("POST", "https://example.com/x", &[], "n", "1");
        let b = creds.authorization_header_at("POST", "https://example.com/x", &[], "n", "1");
        assert_eq!(a, b);
    }
}
