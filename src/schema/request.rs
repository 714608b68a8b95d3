//! Requested animation names as supplied by a caller.

/// Request validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Active animation list must not be empty")]
    Empty,
    #[error("Active animation list contains invalid characters: {0}")]
    InvalidCharacters(String),
    #[error("No valid animation names in active animation list")]
    NoValidNames,
}

/// Ordered list of requested animation names.
///
/// Order and duplicates are kept as given. They do not affect the merged
/// output, which follows database order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestedNames {
    names: Vec<String>,
}

impl RequestedNames {
    /// Parse and validate a comma-separated name list.
    ///
    /// Only `[A-Za-z0-9_,-]` is accepted. Whitespace inside the list is
    /// rejected here, so trimming only matters for lists built with
    /// [`RequestedNames::from_names`].
    pub fn parse(input: &str) -> Result<Self, RequestError> {
        if input.trim().is_empty() {
            return Err(RequestError::Empty);
        }

        if !input.chars().all(is_allowed_char) {
            return Err(RequestError::InvalidCharacters(input.to_string()));
        }

        let requested = Self::from_names(input.split(','));
        if requested.is_empty() {
            return Err(RequestError::NoValidNames);
        }

        Ok(requested)
    }

    /// Build from names without character validation.
    ///
    /// Each name is trimmed and empty names are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Check whether a name was requested.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[inline]
fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ',' | '-')
}
