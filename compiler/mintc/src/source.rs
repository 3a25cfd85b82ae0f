//! Source loading and driver-level errors.

use std::io::{self, Read};

use mint_lexer::LexError;
use mint_parse::ParseError;

use crate::{EXIT_DATA, EXIT_USAGE};

/// Path that selects standard input.
const STDIN_PATH: &str = "-";

/// A program's text and the name diagnostics refer to it by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Load from `path`, or from stdin when `path` is `None` or `-`.
    pub fn load(path: Option<&str>) -> Result<Self, DriverError> {
        match path {
            None | Some(STDIN_PATH) => Self::from_reader("<stdin>", io::stdin().lock()),
            Some(path) => {
                tracing::debug!(path, "reading source");
                let text = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
                    path: path.to_string(),
                    source,
                })?;
                Ok(SourceFile::new(path, text))
            }
        }
    }

    pub fn from_reader(name: &str, mut reader: impl Read) -> Result<Self, DriverError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| DriverError::Read {
                path: name.to_string(),
                source,
            })?;
        Ok(SourceFile::new(name, text))
    }
}

/// Anything that stops the driver before or instead of evaluation.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl DriverError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Read { .. } => EXIT_USAGE,
            DriverError::Lex(_) | DriverError::Parse(_) => EXIT_DATA,
        }
    }

    /// Render as a one-line diagnostic.
    ///
    /// Source errors are prefixed with `<name>:<line>:<col>`.
    pub fn render(&self, source: Option<&SourceFile>) -> String {
        let span = match self {
            DriverError::Read { .. } => None,
            DriverError::Lex(err) => Some(err.span()),
            DriverError::Parse(err) => Some(err.span()),
        };
        match (span, source) {
            (Some(span), Some(source)) => {
                let pos = span.line_col(&source.text);
                format!("{}:{pos}: error: {self}", source.name)
            }
            _ => format!("error: {self}"),
        }
    }
}
