//! Weighted, tokenized fuzzy index.
//!
//! The index is built once per catalog and field set and answers queries with
//! a ranked list of entry identifiers. Each weighted field is scored as the
//! better of a whole-string comparison and a token-by-token comparison; the
//! entry score is the weighted sum of its field scores.

use std::cmp::Ordering;

use adv_model::CatalogEntry;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SearchError};
use crate::options::FuzzyIndexOptions;
use crate::score::{best_token_distance, normalize, string_distance, tokenize};

/// A ranked search result. Lower scores are better; 0.0 is exact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub item: String,
    pub score: f64,
}

#[derive(Debug, Clone)]
struct IndexedField {
    text: String,
    tokens: Vec<String>,
}

#[derive(Debug, Clone)]
struct IndexedDocument {
    item: String,
    /// One slot per weighted field; `None` when the entry lacks the field.
    fields: Vec<Option<IndexedField>>,
}

#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    options: FuzzyIndexOptions,
    weights: Vec<f64>,
    documents: Vec<IndexedDocument>,
}

impl FuzzyIndex {
    /// Builds an index over `entries`, preserving their order for tie-breaks.
    ///
    /// Entries without a value for the id field cannot be reported and are
    /// skipped.
    pub fn build<'a, I>(entries: I, options: FuzzyIndexOptions) -> Result<Self>
    where
        I: IntoIterator<Item = &'a CatalogEntry>,
    {
        options.validate()?;
        let weights = options.normalized_weights();
        let mut skipped = 0usize;
        let mut documents = Vec::new();

        for entry in entries {
            let item = entry.value_or_empty(&options.id_field).trim();
            if item.is_empty() {
                skipped += 1;
                continue;
            }
            let fields = options
                .weighted_fields
                .iter()
                .map(|field| {
                    let text = normalize(entry.value_or_empty(&field.name), options.case_sensitive);
                    if text.is_empty() {
                        None
                    } else {
                        let tokens = tokenize(&text);
                        Some(IndexedField { text, tokens })
                    }
                })
                .collect();
            documents.push(IndexedDocument {
                item: item.to_string(),
                fields,
            });
        }

        debug!(
            id_field = %options.id_field,
            documents = documents.len(),
            skipped,
            "built fuzzy index"
        );

        Ok(Self {
            options,
            weights,
            documents,
        })
    }

    pub fn options(&self) -> &FuzzyIndexOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Searches the index.
    ///
    /// Returns hits within the similarity threshold sorted by ascending score;
    /// equal scores keep catalog order. A query without usable tokens yields
    /// no hits.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::PatternTooLong`] when the query exceeds
    /// `max_pattern_length` characters.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let length = query.chars().count();
        if length > self.options.max_pattern_length {
            return Err(SearchError::PatternTooLong {
                length,
                max: self.options.max_pattern_length,
            });
        }

        let pattern = normalize(query, self.options.case_sensitive);
        let tokens: Vec<String> = tokenize(&pattern)
            .into_iter()
            .filter(|token| token.chars().count() >= self.options.min_match_length)
            .collect();
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let threshold = self.options.similarity_threshold;
        let mut hits: Vec<SearchHit> = self
            .documents
            .iter()
            .filter_map(|document| {
                let score = self.score_document(document, &pattern, &tokens);
                (score <= threshold).then(|| SearchHit {
                    item: document.item.clone(),
                    score,
                })
            })
            .collect();

        // `sort_by` is stable, so ties keep catalog order.
        hits.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        Ok(hits)
    }

    fn score_document(&self, document: &IndexedDocument, pattern: &str, tokens: &[String]) -> f64 {
        document
            .fields
            .iter()
            .zip(&self.weights)
            .map(|(field, weight)| {
                let score = match field {
                    Some(field) => self.score_field(field, pattern, tokens),
                    None => 1.0,
                };
                weight * score
            })
            .sum()
    }

    fn score_field(&self, field: &IndexedField, pattern: &str, tokens: &[String]) -> f64 {
        let whole = string_distance(pattern, &field.text);
        if whole == 0.0 {
            return 0.0;
        }

        let threshold = self.options.similarity_threshold;
        let mut total = 0.0;
        for token in tokens {
            let best = best_token_distance(token, &field.tokens);
            if self.options.match_all_tokens && best > threshold {
                return whole;
            }
            total += best;
        }
        let token_score = total / tokens.len() as f64;
        whole.min(token_score)
    }
}
