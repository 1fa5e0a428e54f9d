use crate::error::{ApiError, ApiResult};
use crate::signing::sign_image_post;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Form payload for the create-site endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSiteRequest<'a> {
    pub site: &'a str,
}

/// Credentials returned by the create-site endpoint.
///
/// Field names are capitalized on the wire. `key` and `secret` are the
/// base64 text the server sent; use [`SiteCredentials`] for the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedSite {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Secret")]
    pub secret: String,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct SiteCredentials {
    pub site: String,
    pub key: Vec<u8>,
    pub secret: Vec<u8>,
}

impl std::fmt::Debug for SiteCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteCredentials")
            .field("site", &self.site)
            .field("key", &hex::encode(&self.key))
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl SiteCredentials {
    pub fn decode(site: &str, key: &str, secret: &str) -> ApiResult<Self> {
        let key = STANDARD
            .decode(key.trim())
            .map_err(|e| ApiError::Validation(format!("key is not base64: {e}")))?;
        let secret = STANDARD
            .decode(secret.trim())
            .map_err(|e| ApiError::Validation(format!("secret is not base64: {e}")))?;
        Ok(Self {
            site: site.to_string(),
            key,
            secret,
        })
    }
}

/// JSON body accepted by the post-image endpoint.
///
/// `key` and `image` travel as standard base64, `signature` as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePost {
    pub key: String,
    pub site: String,
    pub group: String,
    pub id: i64,
    pub image: String,
    pub signature: String,
}

impl ImagePost {
    pub fn signed(
        credentials: &SiteCredentials,
        group: &str,
        id: i64,
        image: &[u8],
    ) -> ApiResult<Self> {
        let signature = sign_image_post(credentials, group, id, image)?;
        Ok(Self {
            key: STANDARD.encode(&credentials.key),
            site: credentials.site.clone(),
            group: group.to_string(),
            id,
            image: STANDARD.encode(image),
            signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_B64: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";
    const SECRET_B64: &str = "ICEiIyQlJicoKSorLC0uLzAxMjM0NTY3ODk6Ozw9Pj8=";

    #[test]
    fn created_site_uses_capitalized_field_names() {
        let site: CreatedSite =
            serde_json::from_str(r#"{"Name":"example","Key":"K1","Secret":"S1"}"#)
                .expect("decode created site");
        assert_eq!(
            site,
            CreatedSite {
                key: "K1".to_string(),
                secret: "S1".to_string(),
                name: "example".to_string(),
            }
        );
    }

    #[test]
    fn created_site_requires_every_field() {
        let result = serde_json::from_str::<CreatedSite>(r#"{"key":"K1","Name":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn credentials_decode_base64_key_and_secret() {
        let creds = SiteCredentials::decode("example", KEY_B64, SECRET_B64).expect("decode");
        assert_eq!(creds.key, (0u8..32).collect::<Vec<_>>());
        assert_eq!(creds.secret, (32u8..64).collect::<Vec<_>>());
    }

    #[test]
    fn credentials_reject_non_base64() {
        let err = SiteCredentials::decode("example", "K1!", SECRET_B64).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let creds = SiteCredentials::decode("example", KEY_B64, SECRET_B64).expect("decode");
        let debug = format!("{creds:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("202122"));
    }

    #[test]
    fn signed_post_encodes_key_and_image_as_base64() {
        let creds = SiteCredentials::decode("example", KEY_B64, SECRET_B64).expect("decode");
        let post = ImagePost::signed(&creds, "http://example.com/", 42, b"\x89PNG").expect("sign");

        assert_eq!(post.key, KEY_B64);
        assert_eq!(post.image, "iVBORw==");
        assert_eq!(post.site, "example");
        assert_eq!(
            post.signature,
            "1fc8b10235df8d9e4fb51c0af3b9f2b355c1e98a7b20a0a0e6f50ef15e7e0a30"
        );

        let json = serde_json::to_value(&post).expect("encode");
        assert_eq!(json["id"], 42);
        assert_eq!(json["group"], "http://example.com/");
    }
}
