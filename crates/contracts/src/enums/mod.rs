pub mod priority;
pub mod status_code;
pub mod tone;
pub mod trend;

pub use priority::Priority;
pub use status_code::StatusCode;
pub use tone::Tone;
pub use trend::Trend;
