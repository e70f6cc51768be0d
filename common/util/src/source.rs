use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const BUILTIN: &str = "builtin";

/// Where a data set comes from.
///
/// `Builtin` refers to data compiled into the binary, everything else is a file.
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash
)]
pub enum Source {
    Builtin,
    File(PathBuf),
}

impl FromStr for Source {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(SourceError::Empty);
        }
        if s.eq_ignore_ascii_case(BUILTIN) {
            return Ok(Source::Builtin);
        }
        Ok(Source::File(PathBuf::from(s)))
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Builtin => f.write_str(BUILTIN),
            Source::File(path) => f.write_str(path.display().to_string().as_str()),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source is empty.")]
    Empty,
}
