//! Query parameter construction for ESearch and ESummary.
//!
//! Kept free of I/O so the parameter contract can be checked without a server.

use crate::error::{ClientError, ClientResult};

/// Contact details attached to every request.
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    /// Contact email (mandatory).
    pub email: &'a str,
    /// API key (optional).
    pub api_key: Option<&'a str>,
}

impl<'a> Credentials<'a> {
    /// Build credentials, failing when no email is available.
    pub fn new(email: Option<&'a str>, api_key: Option<&'a str>) -> ClientResult<Self> {
        let email = email.filter(|e| !e.trim().is_empty()).ok_or(ClientError::MissingCredential)?;
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Ok(Self { email, api_key })
    }

    fn append_to(self, params: &mut Vec<(String, String)>) {
        params.push(("email".to_string(), self.email.to_string()));
        if let Some(key) = self.api_key {
            params.push(("api_key".to_string(), key.to_string()));
        }
    }
}

impl std::fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

/// Join identifiers into the comma-separated `id` parameter.
#[must_use]
pub fn join_ids(ids: &[String]) -> String {
    ids.join(",")
}

/// Parameters for `esearch.fcgi`.
#[must_use]
pub fn esearch_params(
    collection: &str,
    term: &str,
    max_results: u32,
    credentials: Credentials<'_>,
) -> Vec<(String, String)> {
    let mut params = vec![
        ("db".to_string(), collection.to_string()),
        ("term".to_string(), term.to_string()),
        ("retmax".to_string(), max_results.to_string()),
        ("retmode".to_string(), "json".to_string()),
    ];
    credentials.append_to(&mut params);
    params
}

/// Parameters for `esummary.fcgi`.
///
/// An empty `ids` slice still produces an (empty) `id` parameter.
#[must_use]
pub fn esummary_params(
    collection: &str,
    ids: &[String],
    credentials: Credentials<'_>,
) -> Vec<(String, String)> {
    let mut params = vec![
        ("db".to_string(), collection.to_string()),
        ("id".to_string(), join_ids(ids)),
        ("retmode".to_string(), "json".to_string()),
    ];
    credentials.append_to(&mut params);
    params
}
