//! Request signing for image uploads.
//!
//! The server recomputes the MAC from the stored secret and rejects the post
//! when either the key or the signature differs.

use crate::error::{ApiError, ApiResult};
use crate::types::SiteCredentials;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Newline-joined message covered by the signature. Byte fields are
/// lowercase hex, `id` is base-10.
pub fn signature_input(key: &[u8], site: &str, group: &str, id: i64, image: &[u8]) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}",
        hex::encode(key),
        site,
        group,
        id,
        hex::encode(image)
    )
}

pub fn sign_image_post(
    credentials: &SiteCredentials,
    group: &str,
    id: i64,
    image: &[u8],
) -> ApiResult<String> {
    let input = signature_input(&credentials.key, &credentials.site, group, id, image);
    let mut mac = HmacSha256::new_from_slice(&credentials.secret)
        .map_err(|e| ApiError::Validation(format!("invalid secret: {e}")))?;
    mac.update(input.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> SiteCredentials {
        SiteCredentials {
            site: "example".to_string(),
            key: (0u8..32).collect(),
            secret: (32u8..64).collect(),
        }
    }

    #[test]
    fn signature_input_joins_fields_with_newlines() {
        let input = signature_input(&[0xab, 0x01], "site", "group", -7, &[0xff]);
        assert_eq!(input, "ab01\nsite\ngroup\n-7\nff");
    }

    #[test]
    fn signs_with_hmac_sha256() {
        let signature =
            sign_image_post(&credentials(), "http://example.com/", 42, b"\x89PNG").expect("sign");
        assert_eq!(
            signature,
            "1fc8b10235df8d9e4fb51c0af3b9f2b355c1e98a7b20a0a0e6f50ef15e7e0a30"
        );
    }

    #[test]
    fn signature_changes_with_id() {
        let a = sign_image_post(&credentials(), "g", 1, b"img").expect("sign");
        let b = sign_image_post(&credentials(), "g", 2, b"img").expect("sign");
        assert_ne!(a, b);
    }
}
