use adv_search::FuzzyIndexOptions;

/// Tunables for the correction strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionConfig {
    /// Index options for the pathogen catalog.
    pub pathogen_index: FuzzyIndexOptions,
    /// Maximum fuzzy candidates offered.
    pub fuzzy_window: usize,
    /// Maximum candidates offered when an alias is pinned first.
    pub alias_window: usize,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            pathogen_index: FuzzyIndexOptions::default(),
            fuzzy_window: 20,
            alias_window: 10,
        }
    }
}

impl CorrectionConfig {
    #[must_use]
    pub fn with_pathogen_index(mut self, options: FuzzyIndexOptions) -> Self {
        self.pathogen_index = options;
        self
    }
}
