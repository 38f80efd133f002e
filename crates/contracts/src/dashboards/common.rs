use crate::enums::{Tone, Trend};
use serde::{Deserialize, Serialize};

/// How a tile value is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueFormat {
    /// Compact money in the configured currency (`$284K`, `$1.2M`)
    Money,
    Integer,
    Percent { decimals: u8 },
    /// Plain number followed by a unit (`4.2 days`, `6.8x`)
    Number { decimals: u8, suffix: String },
}

/// KPI tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatTile {
    pub title: String,
    pub value: f64,
    pub format: ValueFormat,
    /// Change against the previous period, percent
    pub change_percent: f64,
    pub trend: Trend,
    pub icon: String,
    pub tone: Tone,
    #[serde(default)]
    pub description: Option<String>,
}

impl StatTile {
    /// `+12%`, `-2%`, `+15.3%`
    pub fn change_label(&self) -> String {
        let sign = if self.change_percent < 0.0 { "-" } else { "+" };
        let magnitude = self.change_percent.abs();
        if magnitude.fract() == 0.0 {
            format!("{}{}%", sign, magnitude)
        } else {
            format!("{}{:.1}%", sign, magnitude)
        }
    }
}

/// One labelled value of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(change: f64) -> StatTile {
        StatTile {
            title: "Active RFQs".to_string(),
            value: 24.0,
            format: ValueFormat::Integer,
            change_percent: change,
            trend: Trend::Up,
            icon: "file-text".to_string(),
            tone: Tone::Informative,
            description: None,
        }
    }

    #[test]
    fn test_change_label() {
        assert_eq!(tile(12.0).change_label(), "+12%");
        assert_eq!(tile(-2.0).change_label(), "-2%");
        assert_eq!(tile(15.3).change_label(), "+15.3%");
        assert_eq!(tile(-12.5).change_label(), "-12.5%");
    }

    #[test]
    fn test_value_format_tagging() {
        let f: ValueFormat =
            serde_json::from_str(r#"{"kind":"number","decimals":1,"suffix":" days"}"#).unwrap();
        assert_eq!(
            f,
            ValueFormat::Number {
                decimals: 1,
                suffix: " days".to_string()
            }
        );
        let f: ValueFormat = serde_json::from_str(r#"{"kind":"money"}"#).unwrap();
        assert_eq!(f, ValueFormat::Money);
    }
}
