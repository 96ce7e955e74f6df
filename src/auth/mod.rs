//! Client for the remote authentication service.
//!
//! The service exposes two routes, `POST {base}/login` and
//! `POST {base}/register`, both taking `{username, password}` and answering
//! `{username, token}` on success or `{error}` with a non-success status on
//! rejection. The rejection message is surfaced to the caller verbatim.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Total round-trip timeout. A hung endpoint turns into a `Transport`
/// error instead of blocking the UI indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A proven identity: the username the service accepted and the token it
/// minted for the session. Token present iff username present, by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

/// Errors from a login/register attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service rejected the attempt; `message` is the remote's own
    /// wording from the response body.
    #[error("{message}")]
    Remote { message: String },

    /// The request never completed (connect failure, timeout, ...).
    #[error("Could not reach the authentication service: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success status arrived with a body we could not decode.
    #[error("Unexpected response from the authentication service")]
    InvalidResponse,
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct RemoteRejection {
    error: String,
}

pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build auth client");

        Self { client, base_url }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Credentials, AuthError> {
        self.request("login", username, password).await
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Credentials, AuthError> {
        self.request("register", username, password).await
    }

    async fn request(
        &self,
        route: &str,
        username: &str,
        password: &str,
    ) -> Result<Credentials, AuthError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), route);
        tracing::debug!(%url, %username, "issuing auth request");

        let response = self
            .client
            .post(url)
            .json(&AuthRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        decode_response(status, &body)
    }
}

/// Turn a raw auth response into credentials or a typed error.
///
/// Kept separate from the transport so the status/body handling is
/// testable without a live endpoint.
fn decode_response(status: StatusCode, body: &[u8]) -> Result<Credentials, AuthError> {
    if status.is_success() {
        return serde_json::from_slice(body).map_err(|_| AuthError::InvalidResponse);
    }

    match serde_json::from_slice::<RemoteRejection>(body) {
        Ok(rejection) => Err(AuthError::Remote {
            message: rejection.error,
        }),
        // The service answered with something other than its documented
        // error shape; fall back to the status line.
        Err(_) => Err(AuthError::Remote {
            message: format!("Authentication failed ({})", status),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn decode_success_yields_credentials() {
        let body = br#"{"username":"alice","token":"tok-123"}"#;
        let creds = decode_response(StatusCode::OK, body).unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.token, "tok-123");
    }

    #[test]
    fn decode_rejection_surfaces_remote_message_verbatim() {
        let body = br#"{"error":"invalid credentials"}"#;
        let err = decode_response(StatusCode::UNAUTHORIZED, body).unwrap_err();
        match err {
            AuthError::Remote { message } => assert_eq!(message, "invalid credentials"),
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejection_without_error_body_falls_back_to_status() {
        let err = decode_response(StatusCode::INTERNAL_SERVER_ERROR, b"boom").unwrap_err();
        match err {
            AuthError::Remote { message } => assert!(message.contains("500")),
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn decode_success_with_garbage_body_is_invalid_response() {
        let err = decode_response(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, AuthError::InvalidResponse));
    }

    /// One-shot HTTP responder: accepts a single connection, reads the
    /// request, writes a canned response, and closes.
    fn canned_endpoint(status_line: &'static str, body: &'static str) -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes());
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn login_against_rejecting_endpoint() {
        let base = canned_endpoint("401 Unauthorized", r#"{"error":"invalid credentials"}"#);
        let client = AuthClient::new(base);

        let err = client.login("bob", "wrong").await.unwrap_err();
        match err {
            AuthError::Remote { message } => assert_eq!(message, "invalid credentials"),
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_against_accepting_endpoint() {
        let base = canned_endpoint("200 OK", r#"{"username":"bob","token":"tok-9"}"#);
        let client = AuthClient::new(base);

        let creds = client.login("bob", "right").await.unwrap();
        assert_eq!(
            creds,
            Credentials {
                username: "bob".to_string(),
                token: "tok-9".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Port reserved then dropped, so nothing is listening.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let client = AuthClient::new(format!("http://{addr}"));

        let err = client.login("bob", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)));
    }
}
