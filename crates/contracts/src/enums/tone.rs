use serde::{Deserialize, Serialize};

/// Semantic colour of a badge, tile or gauge.
///
/// The frontend maps every variant onto a concrete UI colour; adding a variant
/// here forces that mapping to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Informative,
    Subtle,
    Brand,
}

impl Tone {
    /// CSS modifier used by stat tiles and gauges (`stat-card--{modifier}`).
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "error",
            Tone::Informative => "info",
            Tone::Subtle => "neutral",
            Tone::Brand => "brand",
        }
    }
}
