use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;

use crate::contexts::{SearchError, SearchResult};

/// Raw text typed into the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub given_names: String,
    pub surnames: String,
}

/// A query whose parts are trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidQuery {
    given_names: String,
    surnames: String,
}

impl SearchQuery {
    pub fn new(given_names: impl Into<String>, surnames: impl Into<String>) -> Self {
        Self {
            given_names: given_names.into(),
            surnames: surnames.into(),
        }
    }

    /// Trims both parts and rejects the query if either ends up empty.
    pub fn validate(&self) -> SearchResult<ValidQuery> {
        let given_names = self.given_names.trim();
        let surnames = self.surnames.trim();

        if given_names.is_empty() || surnames.is_empty() {
            return Err(SearchError::Validation);
        }

        Ok(ValidQuery {
            given_names: given_names.to_string(),
            surnames: surnames.to_string(),
        })
    }
}

impl ValidQuery {
    pub fn given_names(&self) -> &str {
        &self.given_names
    }

    pub fn surnames(&self) -> &str {
        &self.surnames
    }

    /// `{base}/sri?nombres=..&apellidos=..` with both parts percent-encoded.
    pub fn lookup_url(&self, base_url: &str) -> SearchResult<Url> {
        let raw = format!(
            "{}/sri?nombres={}&apellidos={}",
            base_url.trim_end_matches('/'),
            encode_component(&self.given_names),
            encode_component(&self.surnames),
        );
        Url::parse(&raw).map_err(|e| SearchError::Transport(e.to_string()))
    }
}

/// URI-component set: alphanumerics plus `-_.!~*'()` stay as they are.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a query value. Spaces become `%20`, not `+`.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}
