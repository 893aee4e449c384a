use serde::Serialize;

/// Semantic colour used when rendering status and priority chips.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Info,
    Error,
}
