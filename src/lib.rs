//! A minimal client for creating issues in a JIRA-style REST API.
//!
//! Configuration accumulates through chained setters on [`IssueClient`];
//! [`IssueClient::create_issue`] then performs a single authenticated POST
//! to `{url}/rest/api/{version}/issue` and returns the raw response body.
//! There is no pagination, searching, or retry logic here: one client, one
//! call, one response.
//!
//! ```no_run
//! use jiralite::IssueClient;
//!
//! fn main() -> jiralite::Result<()> {
//!     let mut client = IssueClient::new()?;
//!     client
//!         .set_username("user@example.com")
//!         .set_password("secret")
//!         .set_url("https://jira.example.com")
//!         .set_project_by_key("EDU")
//!         .set_issue_type_by_name("Task")
//!         .set_summary("Broken build on main")
//!         .set_description("The pipeline fails at the package step");
//!
//!     let response = client.create_issue()?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
//!
//! The network seam is the [`Transport`] trait; tests and embedders can
//! substitute their own implementation via
//! [`IssueClient::with_transport`].

mod auth;
mod client;
mod error;
mod transport;

pub use auth::{base64_credentials, basic_header};
pub use client::IssueClient;
pub use error::{Error, Result};
pub use transport::{HttpTransport, Transport};
