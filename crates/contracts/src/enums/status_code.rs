use super::Tone;
use std::fmt::Debug;
use std::hash::Hash;

/// A closed set of status tags carried by a record.
///
/// Each implementor lists its variants in display order. The order drives the
/// bucket order of status counts and the option order of filter selects.
pub trait StatusCode: Copy + Eq + Hash + Debug + 'static {
    /// Every variant, in display order.
    fn all() -> &'static [Self];

    /// Wire code as it appears in fixtures and select values (e.g. "in_production").
    fn code(&self) -> &'static str;

    /// Human-readable label.
    fn display_name(&self) -> &'static str;

    /// Badge colour.
    fn tone(&self) -> Tone;

    /// Parse a wire code. Codes are matched exactly.
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.code() == code)
    }
}
