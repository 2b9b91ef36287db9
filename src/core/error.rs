use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The canonical data source lookup found zero or multiple matches, or
    /// the matched source does not expose window-pool statistics.
    NoSuchDataSource,
    /// The bound statistics source has been torn down since binding.
    SourceUnavailable,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    data_source: Option<String>,
    matches: Option<usize>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            data_source: None,
            matches: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data_source(&self) -> Option<&str> {
        self.data_source.as_deref()
    }

    /// How many candidate data sources matched the canonical name, when the
    /// failing operation was a lookup.
    pub fn matches(&self) -> Option<usize> {
        self.matches
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_data_source(mut self, name: impl Into<String>) -> Self {
        self.data_source = Some(name.into());
        self
    }

    pub fn with_matches(mut self, matches: usize) -> Self {
        self.matches = Some(matches);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(data_source) = &self.data_source {
            write!(f, " (data source: {data_source})")?;
        }
        if let Some(matches) = self.matches {
            write!(f, " (matches: {matches})")?;
        }
        Ok(())
    }
}

impl StdError for Error {}
