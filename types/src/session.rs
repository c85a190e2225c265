use jiff::Timestamp;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE_NAME: &str = "threadle_session";

/// The signed-in user as the blog service reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: Timestamp,
}

/// Server-side session payload. Only [`User`] is ever sent to the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub user: User,
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}

#[cfg(feature = "server")]
mod codec {
    use anyhow::Context;
    use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
    use hmac::{Hmac, Mac};
    use secrecy::{ExposeSecret, SecretString};
    use sha2::Sha256;

    use super::UserSession;
    use crate::{Result, err};

    type HmacSha256 = Hmac<Sha256>;

    fn mac(secret: &SecretString, payload: &str) -> Result<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
            .map_err(|_| err!("invalid session secret"))?;
        mac.update(payload.as_bytes());
        Ok(mac)
    }

    /// Encode a session as `payload.signature`, both base64url without padding.
    pub fn encode_session(session: &UserSession, secret: &SecretString) -> Result<String> {
        let json = serde_json::to_string(session).context("failed to serialize session")?;
        let payload = BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD.encode(mac(secret, &payload)?.finalize().into_bytes());

        Ok(format!("{payload}.{signature}"))
    }

    pub fn decode_session(encoded: &str, secret: &SecretString) -> Result<UserSession> {
        let (payload, signature) = encoded
            .split_once('.')
            .ok_or_else(|| err!("invalid session format"))?;

        let signature = BASE64_URL_SAFE_NO_PAD
            .decode(signature)
            .context("failed to decode session signature")?;
        mac(secret, payload)?
            .verify_slice(&signature)
            .map_err(|_| err!("session signature mismatch"))?;

        let bytes = BASE64_URL_SAFE_NO_PAD
            .decode(payload)
            .context("failed to decode base64")?;
        let json = String::from_utf8(bytes).context("invalid UTF-8 in session")?;
        Ok(serde_json::from_str(&json).context("failed to parse session JSON")?)
    }
}

#[cfg(feature = "server")]
pub use codec::{decode_session, encode_session};
