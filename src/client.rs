//! The fluent issue-creation client.
//!
//! [`IssueClient`] accumulates configuration through chained setters, then
//! `create_issue` validates it, POSTs to
//! `{url}/rest/api/{version}/issue` with Basic auth, and returns the raw
//! response body. The client survives across calls: after a successful
//! create, summary and description reset to empty while credentials, URL,
//! project, and issue type persist for the next issue.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{json, Map, Value};
use tracing::{debug, info, instrument};

use crate::auth;
use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport};

/// Fixed API path prefix between the base URL and the version segment.
const API_PATH: &str = "/rest/api/";

/// Default REST API version.
const DEFAULT_VERSION: &str = "2";

/// Separator inserted between description lines.
///
/// JIRA does not render raw newlines in every view, so multi-line
/// descriptions are joined with this literal token. Existing consumers
/// depend on the exact bytes; do not change it.
const DESCRIPTION_SEPARATOR: &str = r" \\\ ";

/// A client for creating issues in a JIRA-style REST API.
pub struct IssueClient {
    transport: Box<dyn Transport>,
    username: String,
    password: String,
    url: String,
    version: String,
    project: BTreeMap<String, String>,
    issue_type: BTreeMap<String, String>,
    summary: String,
    description: String,
}

impl IssueClient {
    /// Create a client with empty configuration and the default
    /// [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(Box::new(HttpTransport::new()?)))
    }

    /// Create a client with credentials and base URL already set.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_credentials(username: &str, password: &str, url: &str) -> Result<Self> {
        let mut client = Self::new()?;
        client
            .set_username(username)
            .set_password(password)
            .set_url(url);
        Ok(client)
    }

    /// Create a client that talks through the given transport.
    ///
    /// Use this to inject a custom HTTP stack, or a spy in tests.
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            username: String::new(),
            password: String::new(),
            url: String::new(),
            version: DEFAULT_VERSION.to_string(),
            project: empty_ref("id", "key"),
            issue_type: empty_ref("id", "name"),
            summary: String::new(),
            description: String::new(),
        }
    }

    /// Set the username used for Basic auth.
    pub fn set_username(&mut self, username: &str) -> &mut Self {
        self.username = username.to_string();
        self
    }

    /// Get the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Set the password used for Basic auth.
    pub fn set_password(&mut self, password: &str) -> &mut Self {
        self.password = password.to_string();
        self
    }

    /// Get the password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Set the base URL of the JIRA instance.
    pub fn set_url(&mut self, url: &str) -> &mut Self {
        self.url = url.to_string();
        self
    }

    /// Get the base URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Set the REST API version segment (default `"2"`).
    pub fn set_version(&mut self, version: &str) -> &mut Self {
        self.version = version.to_string();
        self
    }

    /// Get the API version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Set the project by its key (e.g. `"EDU"`).
    pub fn set_project_by_key(&mut self, key: &str) -> &mut Self {
        self.project.insert("key".to_string(), key.to_string());
        self
    }

    /// Set the project by its numeric id.
    pub fn set_project_by_id(&mut self, id: &str) -> &mut Self {
        self.project.insert("id".to_string(), id.to_string());
        self
    }

    /// Get the project reference: a mapping with `id` and `key` entries,
    /// both present even when unset.
    pub fn project(&self) -> &BTreeMap<String, String> {
        &self.project
    }

    /// Get a single project field (`"id"` or `"key"`).
    ///
    /// Returns `None` for an unknown field name.
    pub fn project_field(&self, field: &str) -> Option<&str> {
        self.project.get(field).map(String::as_str)
    }

    /// Set the issue type by its name (e.g. `"Task"`).
    pub fn set_issue_type_by_name(&mut self, name: &str) -> &mut Self {
        self.issue_type.insert("name".to_string(), name.to_string());
        self
    }

    /// Set the issue type by its numeric id.
    pub fn set_issue_type_by_id(&mut self, id: &str) -> &mut Self {
        self.issue_type.insert("id".to_string(), id.to_string());
        self
    }

    /// Get the issue type reference: a mapping with `id` and `name` entries,
    /// both present even when unset.
    pub fn issue_type(&self) -> &BTreeMap<String, String> {
        &self.issue_type
    }

    /// Get a single issue type field (`"id"` or `"name"`).
    ///
    /// Returns `None` for an unknown field name.
    pub fn issue_type_field(&self, field: &str) -> Option<&str> {
        self.issue_type.get(field).map(String::as_str)
    }

    /// Set the issue summary (title).
    pub fn set_summary(&mut self, summary: &str) -> &mut Self {
        self.summary = summary.to_string();
        self
    }

    /// Get the summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Set the issue description, replacing any previous content.
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = description.to_string();
        self
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Append a line to the description, prefixed with the line separator
    /// token. An empty `line` leaves a trailing separator.
    pub fn add_description_line(&mut self, line: &str) -> &mut Self {
        self.description.push_str(DESCRIPTION_SEPARATOR);
        self.description.push_str(line);
        self
    }

    /// Create the issue.
    ///
    /// Validates that username, password, and base URL are set (in that
    /// order), POSTs the issue fields to `{url}/rest/api/{version}/issue`
    /// with Basic auth, and returns the raw response body. On success the
    /// summary and description reset to empty so the client can be reused
    /// for the next issue; project, issue type, credentials, URL, and
    /// version are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a `Missing*` error before any network activity if a required
    /// field is unset, or [`Error::Transport`] if the HTTP call fails. No
    /// retries are performed.
    #[instrument(skip(self), fields(version = %self.version))]
    pub fn create_issue(&mut self) -> Result<String> {
        self.validate()?;

        let uri = self.uri("issue");
        let header = auth::basic_header(&self.username, &self.password);
        let body = self.request_body();

        debug!(%uri, "posting new issue");
        let response = self.transport.post(&uri, &header, &body)?;
        info!("issue created");

        self.summary.clear();
        self.description.clear();

        Ok(response)
    }

    /// Check required fields, reporting the first missing one.
    fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(Error::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(Error::MissingPassword);
        }
        if self.url.is_empty() {
            return Err(Error::MissingUrl);
        }
        Ok(())
    }

    /// Build the request URI: `((url ⋈ /rest/api/) ⋈ version) ⋈ extra`.
    fn uri(&self, extra: &str) -> String {
        let joined = join_by_slash(&join_by_slash(&self.url, API_PATH), &self.version);
        join_by_slash(&joined, extra)
    }

    /// Build the JSON request body from the current fields. Empty entries
    /// are dropped from the project and issue type references.
    fn request_body(&self) -> Value {
        json!({
            "fields": {
                "project": remove_empty_values(&self.project),
                "summary": self.summary,
                "description": self.description,
                "issuetype": remove_empty_values(&self.issue_type),
            }
        })
    }
}

impl fmt::Debug for IssueClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueClient")
            .field("username", &self.username)
            .field("url", &self.url)
            .field("version", &self.version)
            .field("project", &self.project)
            .field("issue_type", &self.issue_type)
            .field("summary", &self.summary)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A two-entry reference map with both values unset.
fn empty_ref(first: &str, second: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert(first.to_string(), String::new());
    map.insert(second.to_string(), String::new());
    map
}

/// Join two path fragments with exactly one `/` at the junction.
fn join_by_slash(prefix: &str, suffix: &str) -> String {
    if prefix.ends_with('/') && suffix.starts_with('/') {
        format!("{}{}", prefix.trim_end_matches('/'), suffix)
    } else if !prefix.ends_with('/') && !suffix.starts_with('/') {
        format!("{}/{}", prefix, suffix)
    } else {
        format!("{}{}", prefix, suffix)
    }
}

/// Drop empty-string entries from a reference map, keeping the order of the
/// remaining keys.
fn remove_empty_values(map: &BTreeMap<String, String>) -> Map<String, Value> {
    map.iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect()
}
