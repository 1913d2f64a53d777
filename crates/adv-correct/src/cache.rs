//! Per-strategy memo of positive suggestions.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};

use adv_model::CorrectionSuggestion;

/// Positive results keyed by trimmed input.
///
/// Only suggestions are stored; negative outcomes are recomputed. Entries are
/// never invalidated. Concurrent callers may both miss and compute the same
/// key; the second insert overwrites an equal value.
pub(crate) struct SuggestionCache<K = String> {
    entries: RwLock<HashMap<K, CorrectionSuggestion>>,
}

impl<K> SuggestionCache<K>
where
    K: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cached suggestion for `key`, reporting `original` as the raw input.
    pub(crate) fn get<Q>(&self, key: &Q, original: &str) -> Option<CorrectionSuggestion>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .map(|suggestion| suggestion.with_original(original))
    }

    pub(crate) fn insert(&self, key: K, suggestion: CorrectionSuggestion) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, suggestion);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<K> fmt::Debug for SuggestionCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionCache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adv_model::{CorrectionCode, SampleField};

    #[test]
    fn hit_reports_current_raw_input() {
        let cache = SuggestionCache::new();
        cache.insert(
            "1234xxx".to_string(),
            CorrectionSuggestion::new(
                SampleField::OperationsModeAdv,
                "1234xxx",
                vec!["1234000".to_string()],
                CorrectionCode::OPERATIONS_MODE,
            ),
        );

        let hit = cache.get("1234xxx", "  1234xxx ").unwrap();
        assert_eq!(hit.original, "  1234xxx ");
        assert_eq!(hit.correction_offer, vec!["1234000"]);
        assert!(cache.get("1234xxxx", "1234xxxx").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn composite_keys() {
        let cache: SuggestionCache<(String, String)> = SuggestionCache::new();
        let key = ("X".to_string(), "M1".to_string());
        cache.insert(
            key.clone(),
            CorrectionSuggestion::new(
                SampleField::TopicAdv,
                "X",
                vec!["Y".to_string()],
                CorrectionCode::DEPENDENCY_RESOLVED,
            ),
        );
        assert!(cache.get(&key, "X").is_some());
        assert!(
            cache
                .get(&("X".to_string(), "M2".to_string()), "X")
                .is_none()
        );
    }
}
