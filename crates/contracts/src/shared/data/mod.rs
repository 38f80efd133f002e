//! Record collections behind the `DataProvider` interface.

pub mod provider;

pub use provider::{DataProvider, FixtureSources, JsonDataProvider, SampleDataProvider};
