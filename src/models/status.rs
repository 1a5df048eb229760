//! Status codes for time-record punches.
//!
//! The status vocabulary is a wire contract with the surrounding
//! persistence and API layers: the five codes are persisted and exchanged
//! as the exact strings `VERDE`, `AMARELO`, `VERMELHO`, `CINZA` and
//! `EM_ANDAMENTO`.

use serde::{Deserialize, Serialize};

/// The status of a single punch (entry or exit) on a time record.
///
/// Statuses are derived by the classifier and never set independently;
/// they are recomputed whenever the underlying timestamp or schedule
/// changes.
///
/// # Example
///
/// ```
/// use ponto_engine::models::StatusCode;
///
/// assert_eq!(StatusCode::Verde.as_str(), "VERDE");
/// assert_eq!(serde_json::to_string(&StatusCode::EmAndamento).unwrap(), "\"EM_ANDAMENTO\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    /// On time: the punch is within the tolerance window.
    Verde,
    /// Minor deviation: late entry or moderate overtime.
    Amarelo,
    /// Major deviation: severely late entry or excessive overtime.
    Vermelho,
    /// Undefined: no scheduled boundary could be resolved for the
    /// collaborator. A data-availability state, not a timing judgment.
    Cinza,
    /// The shift is still open: an exit punch has not happened yet.
    EmAndamento,
}

impl StatusCode {
    /// Returns the wire string for this status code.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Verde => "VERDE",
            StatusCode::Amarelo => "AMARELO",
            StatusCode::Vermelho => "VERMELHO",
            StatusCode::Cinza => "CINZA",
            StatusCode::EmAndamento => "EM_ANDAMENTO",
        }
    }

    /// Parses a wire string into a status code.
    ///
    /// Returns `None` for strings outside the known vocabulary; callers
    /// that need forward compatibility with unknown codes should fall
    /// through to [`crate::rules::presentation_for`].
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "VERDE" => Some(StatusCode::Verde),
            "AMARELO" => Some(StatusCode::Amarelo),
            "VERMELHO" => Some(StatusCode::Vermelho),
            "CINZA" => Some(StatusCode::Cinza),
            "EM_ANDAMENTO" => Some(StatusCode::EmAndamento),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
