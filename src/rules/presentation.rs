//! Status presentation mapping.
//!
//! A pure lookup from persisted status codes to display text and a display
//! style category. The mapping is total over the known vocabulary and
//! passes unknown codes through as their own label, so consumers keep
//! working when the status set grows.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Display style category for a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusStyle {
    /// Positive: on time / on schedule.
    Success,
    /// Needs attention: minor deviation.
    Warning,
    /// Violation: major deviation.
    Danger,
    /// Neutral: undefined or unknown status.
    Muted,
    /// Informational: shift still in progress.
    Info,
}

/// The label and style a consumer renders for a status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    /// Human-readable label.
    pub label: Cow<'static, str>,
    /// Display style category.
    pub style: StatusStyle,
}

/// Maps a persisted status code to its presentation.
///
/// Codes outside the known vocabulary are passed through as their raw
/// string with a neutral style rather than failing.
///
/// # Examples
///
/// ```
/// use ponto_engine::rules::{presentation_for, StatusStyle};
///
/// let p = presentation_for("VERDE");
/// assert_eq!(p.label, "No horário");
/// assert_eq!(p.style, StatusStyle::Success);
///
/// let unknown = presentation_for("ROXO");
/// assert_eq!(unknown.label, "ROXO");
/// assert_eq!(unknown.style, StatusStyle::Muted);
/// ```
pub fn presentation_for(code: &str) -> StatusPresentation {
    let (label, style): (Cow<'static, str>, StatusStyle) = match code {
        "VERDE" => (Cow::Borrowed("No horário"), StatusStyle::Success),
        "AMARELO" => (Cow::Borrowed("Atenção"), StatusStyle::Warning),
        "VERMELHO" => (Cow::Borrowed("Crítico"), StatusStyle::Danger),
        "CINZA" => (Cow::Borrowed("Indefinido"), StatusStyle::Muted),
        "EM_ANDAMENTO" => (Cow::Borrowed("Em andamento"), StatusStyle::Info),
        other => (Cow::Owned(other.to_string()), StatusStyle::Muted),
    };

    StatusPresentation { label, style }
}
