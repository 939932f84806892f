/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::properties::ResponseFormat;

/// Query parameters for an API call.
///
/// Keys map to optional values so that per-operation arguments can be passed
/// through unconditionally; entries with an absent value never reach the
/// signed request (absent is not the same as empty string).
#[derive(Default, Debug, Clone)]
pub struct ApiParams {
    entries: Vec<(String, Option<String>)>,
}

impl ApiParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.push((key.to_owned(), Some(value.into())));
        self
    }

    pub fn opt(mut self, key: &str, value: Option<impl Into<String>>) -> Self {
        self.entries.push((key.to_owned(), value.map(Into::into)));
        self
    }

    /// Sets the resource identifier the base path's `!` placeholder refers to.
    pub fn id(self, identifier: &Identifier) -> Self {
        self.set("id", identifier.as_str())
    }

    pub fn format(self, format: ResponseFormat) -> Self {
        self.set("format", <&'static str>::from(format))
    }

    /// Resolves the parameter set that gets signed and sent: entries with an
    /// absent value are dropped, and `format` defaults to `json` unless the
    /// caller mentioned the key itself.
    pub fn prepared(&self) -> Vec<(String, String)> {
        let mut prepared: Vec<(String, String)> = self
            .entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
            .collect();
        if !self.entries.iter().any(|(k, _)| k == "format") {
            prepared.push(("format".to_owned(), "json".to_owned()));
        }
        prepared
    }
}

/// Photobucket's path-embedded resource locator.
///
/// Multi-segment identifiers (e.g. a nested album path) are joined with a
/// literal `/` encoded as `%2F`, never passed along as a nested structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect();
        Self(segments.join("%2F"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identifier {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

impl From<String> for Identifier {
    fn from(identifier: String) -> Self {
        Self::new(identifier)
    }
}
