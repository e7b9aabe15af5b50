//! Search orchestration over a completion model.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{Result, SearchError};
use crate::pipeline::parser::parse_response;
use crate::pipeline::prompt::render_search_prompt;
use crate::pipeline::validator::validate_record;
use crate::traits::model::CompletionModel;
use crate::types::dataset::Dataset;
use crate::types::search::SearchResult;

/// Score decrement per rank position.
const SCORE_STEP: f32 = 0.1;

/// Runs one search: prompt the model, parse its reply, validate each
/// candidate, and assemble the surviving datasets into a result.
///
/// Relevance comes from position alone. The model is instructed to
/// return entries most-relevant-first, and the searcher converts that
/// rank into a score rather than trusting any number the model emits.
pub struct Searcher<M: CompletionModel> {
    model: M,
}

impl<M: CompletionModel> Searcher<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// The underlying completion model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Search for datasets matching a natural-language query.
    ///
    /// The query is substituted into the prompt verbatim. It is treated
    /// as trusted input and not escaped, so a query containing prompt
    /// text will steer the model.
    ///
    /// Invalid records are skipped with a warning; they still consume
    /// their rank position, so survivors keep the scores of their
    /// original placement. A response with no valid records at all is
    /// an error, never an empty result.
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        debug!(query = %query, "starting dataset search");

        let prompt = render_search_prompt(query);
        let response = self.model.complete(&prompt).await?;
        let candidates = parse_response(&response)?;

        let mut datasets = Vec::new();
        let mut skipped = 0usize;
        for (index, candidate) in candidates.iter().enumerate() {
            match validate_record(candidate) {
                Ok(record) => datasets.push(Dataset {
                    name: record.name,
                    description: record.description,
                    url: record.url,
                    domain: record.domain,
                    use_cases: record.use_cases,
                    relevance_score: relevance_score(index),
                    timestamp: Utc::now(),
                }),
                Err(reason) => {
                    skipped += 1;
                    warn!(query = %query, index = index, %reason, "skipping invalid record");
                }
            }
        }

        if datasets.is_empty() {
            warn!(query = %query, "model response contained no valid datasets");
            return Err(SearchError::NoValidDatasets);
        }

        info!(
            query = %query,
            dataset_count = datasets.len(),
            skipped = skipped,
            "search complete"
        );
        Ok(SearchResult::new(query, datasets))
    }
}

/// Score for the record at `index`: 1.0 for the first, stepping down by
/// 0.1 per position, floored at 0.0.
fn relevance_score(index: usize) -> f32 {
    (1.0 - SCORE_STEP * index as f32).max(0.0)
}
