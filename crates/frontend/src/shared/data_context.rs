//! Data provider and UI settings as Leptos context.

use contracts::shared::config::AppConfig;
use contracts::shared::data::{DataProvider, SampleDataProvider};
use leptos::prelude::*;

/// Handle to the collections every page reads.
#[derive(Clone, Copy)]
pub struct DataContext {
    pub provider: &'static (dyn DataProvider + Send + Sync),
}

static SAMPLE_PROVIDER: SampleDataProvider = SampleDataProvider;

impl DataContext {
    /// Bundled sample collections
    pub fn sample() -> Self {
        Self {
            provider: &SAMPLE_PROVIDER,
        }
    }
}

pub fn use_data() -> &'static (dyn DataProvider + Send + Sync) {
    use_context::<DataContext>()
        .unwrap_or_else(DataContext::sample)
        .provider
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
