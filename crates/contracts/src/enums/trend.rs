use super::Tone;
use serde::{Deserialize, Serialize};

/// Direction of a KPI change relative to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "\u{2191}",
            Trend::Down => "\u{2193}",
        }
    }

    /// Up reads green, down reads red, regardless of the metric.
    pub fn tone(&self) -> Tone {
        match self {
            Trend::Up => Tone::Success,
            Trend::Down => Tone::Danger,
        }
    }
}
