//! Ordered registry of correction strategies.
//!
//! [`StrategyRegistry::from_catalogs`] builds the six ADV strategies in their
//! fixed order. Strategies can be switched off per field without rebuilding,
//! which keeps their caches and the pathogen index intact.

use std::collections::BTreeSet;
use std::sync::Arc;

use adv_catalog::CatalogPort;
use adv_model::SampleField;
use tracing::info;

use crate::config::CorrectionConfig;
use crate::error::Result;
use crate::strategies::{
    MatrixStrategy, OperationsModeStrategy, PathogenStrategy, ProcessStateStrategy,
    SamplingLocationStrategy, TopicStrategy,
};
use crate::strategy::CorrectionStrategy;

/// Strategies keyed by field, iterated in registration order.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn CorrectionStrategy>>,
    disabled: BTreeSet<SampleField>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds all ADV strategies over `catalogs`.
    ///
    /// Order: ADV-2, ADV-12, ADV-3, ADV-8, ADV-9, ADV-16.
    ///
    /// # Errors
    ///
    /// Returns [`CorrectionError::Configuration`] when a required catalog or
    /// field is missing.
    ///
    /// [`CorrectionError::Configuration`]: crate::CorrectionError::Configuration
    pub fn from_catalogs(catalogs: Arc<dyn CatalogPort>, config: &CorrectionConfig) -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Box::new(TopicStrategy::new(Arc::clone(&catalogs))?));
        registry.register(Box::new(ProcessStateStrategy::new(Arc::clone(&catalogs))?));
        registry.register(Box::new(MatrixStrategy::new(Arc::clone(&catalogs))?));
        registry.register(Box::new(OperationsModeStrategy::new(Arc::clone(&catalogs))?));
        registry.register(Box::new(SamplingLocationStrategy::new(Arc::clone(
            &catalogs,
        ))?));
        registry.register(Box::new(PathogenStrategy::new(catalogs, config)?));
        info!(strategies = registry.len(), "correction strategies ready");
        Ok(registry)
    }

    /// Registers a strategy for its field.
    ///
    /// A strategy already registered for the same field is replaced in place.
    pub fn register(&mut self, strategy: Box<dyn CorrectionStrategy>) {
        let field = strategy.field();
        match self.strategies.iter().position(|s| s.field() == field) {
            Some(position) => self.strategies[position] = strategy,
            None => self.strategies.push(strategy),
        }
    }

    pub fn get(&self, field: SampleField) -> Option<&dyn CorrectionStrategy> {
        self.strategies
            .iter()
            .find(|s| s.field() == field)
            .map(AsRef::as_ref)
    }

    /// All strategies in registration order, disabled ones included.
    pub fn iter(&self) -> impl Iterator<Item = &dyn CorrectionStrategy> {
        self.strategies.iter().map(AsRef::as_ref)
    }

    /// Strategies that are currently enabled, in registration order.
    pub fn enabled(&self) -> impl Iterator<Item = &dyn CorrectionStrategy> {
        self.iter().filter(|s| !self.disabled.contains(&s.field()))
    }

    /// Returns the registered fields in order.
    pub fn fields(&self) -> impl Iterator<Item = SampleField> + '_ {
        self.strategies.iter().map(|s| s.field())
    }

    /// Disables the strategy for `field`. Returns false if none is registered.
    pub fn disable(&mut self, field: SampleField) -> bool {
        if self.get(field).is_none() {
            return false;
        }
        self.disabled.insert(field);
        true
    }

    pub fn enable(&mut self, field: SampleField) {
        self.disabled.remove(&field);
    }

    pub fn is_disabled(&self, field: SampleField) -> bool {
        self.disabled.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adv_model::{CorrectionSuggestion, SampleData};

    struct Fixed(SampleField, &'static str);

    impl CorrectionStrategy for Fixed {
        fn field(&self) -> SampleField {
            self.0
        }

        fn description(&self) -> &'static str {
            self.1
        }

        fn suggest(&self, _sample: &SampleData) -> Result<Option<CorrectionSuggestion>> {
            Ok(None)
        }
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = StrategyRegistry::new();
        registry.register(Box::new(Fixed(SampleField::TopicAdv, "topic")));
        registry.register(Box::new(Fixed(SampleField::PathogenAdv, "pathogen")));
        registry.register(Box::new(Fixed(SampleField::MatrixAdv, "matrix")));
        let fields: Vec<_> = registry.fields().collect();
        assert_eq!(
            fields,
            vec![
                SampleField::TopicAdv,
                SampleField::PathogenAdv,
                SampleField::MatrixAdv
            ]
        );
    }

    #[test]
    fn register_replaces_in_place() {
        let mut registry = StrategyRegistry::new();
        registry.register(Box::new(Fixed(SampleField::TopicAdv, "first")));
        registry.register(Box::new(Fixed(SampleField::MatrixAdv, "matrix")));
        registry.register(Box::new(Fixed(SampleField::TopicAdv, "second")));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().next().unwrap().description(), "second");
    }

    #[test]
    fn disable_and_enable() {
        let mut registry = StrategyRegistry::new();
        registry.register(Box::new(Fixed(SampleField::TopicAdv, "topic")));
        registry.register(Box::new(Fixed(SampleField::MatrixAdv, "matrix")));

        assert!(registry.disable(SampleField::TopicAdv));
        assert!(registry.is_disabled(SampleField::TopicAdv));
        assert_eq!(registry.enabled().count(), 1);
        assert_eq!(registry.iter().count(), 2);

        assert!(!registry.disable(SampleField::PathogenAdv));
        assert!(!registry.is_disabled(SampleField::PathogenAdv));

        registry.enable(SampleField::TopicAdv);
        assert_eq!(registry.enabled().count(), 2);
    }

    #[test]
    fn label_uses_catalog_number() {
        let strategy = Fixed(SampleField::PathogenAdv, "pathogen");
        assert_eq!(strategy.label(), "ADV-16");
        let other = Fixed(SampleField::Comment, "comment");
        assert_eq!(other.label(), "comment");
    }
}
