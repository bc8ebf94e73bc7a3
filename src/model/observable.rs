use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid observable type: '{0}'")]
pub struct ParseObservableKindError(String);

/// How an observable counts pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObservableKind {
    /// Every match of the pattern counts.
    Molecules,
    /// Each matching complex counts once.
    Species,
}

impl FromStr for ObservableKind {
    type Err = ParseObservableKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Molecules" => Ok(ObservableKind::Molecules),
            "Species" => Ok(ObservableKind::Species),
            _ => Err(ParseObservableKindError(s.to_string())),
        }
    }
}

impl fmt::Display for ObservableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservableKind::Molecules => write!(f, "Molecules"),
            ObservableKind::Species => write!(f, "Species"),
        }
    }
}
