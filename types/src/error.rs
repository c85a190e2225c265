use dioxus::prelude::ServerFnError;
use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A serializable error for client rendering.
///
/// Built from an `anyhow` chain, so the message carries every context layer
/// (`outer: inner: root`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
    /// HTTP status handed to the client. `None` means 500.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl Error {
    /// The caller has no valid session. Clients send the visitor to the login page.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(401),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        Self {
            message: format!("{report:#}"),
            status: None,
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self {
            message: s.to_string(),
            status: None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self {
            message: s,
            status: None,
        }
    }
}

impl From<Error> for ServerFnError {
    fn from(error: Error) -> Self {
        ServerFnError::ServerError {
            message: error.message,
            code: error.status.unwrap_or(500),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn keeps_the_whole_context_chain() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("connection refused"))
            .context("failed to fetch blogs");

        let error = Error::from(result.unwrap_err());
        assert_eq!(error.message, "failed to fetch blogs: connection refused");
    }

    #[test]
    fn err_macro_formats_arguments() {
        let error = crate::err!("post {} not found", "abc");
        assert_eq!(error.to_string(), "post abc not found");
    }

    #[test]
    fn server_fn_errors_keep_message_and_status() {
        match ServerFnError::from(crate::err!("blog not found")) {
            ServerFnError::ServerError { message, code, .. } => {
                assert_eq!(message, "blog not found");
                assert_eq!(code, 500);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match ServerFnError::from(Error::unauthorized("you need to be signed in")) {
            ServerFnError::ServerError { message, code, .. } => {
                assert_eq!(message, "you need to be signed in");
                assert_eq!(code, 401);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_survives_the_wire() {
        let json = serde_json::to_string(&Error::from("plain")).unwrap();
        assert_eq!(json, r#"{"message":"plain"}"#);

        let back: Error = serde_json::from_str(r#"{"message":"x","status":401}"#).unwrap();
        assert_eq!(back, Error::unauthorized("x"));
    }
}
