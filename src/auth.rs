//! Basic Auth credential encoding.
//!
//! JIRA accepts HTTP Basic authentication: `username:password` encoded in
//! Base64 and sent in the `Authorization` header. Credentials are encoded
//! fresh for each request; the encoded form is never cached.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Encode `username:password` in Base64.
pub fn base64_credentials(username: &str, password: &str) -> String {
    BASE64.encode(format!("{}:{}", username, password).as_bytes())
}

/// Build the complete `Basic ...` value for the `Authorization` header.
pub fn basic_header(username: &str, password: &str) -> String {
    format!("Basic {}", base64_credentials(username, password))
}
