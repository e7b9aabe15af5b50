//! The search prompt.
//!
//! One fixed template. The query is substituted verbatim; everything
//! else is the output contract the parser and validator downstream
//! depend on. Change the contract here and the repair heuristics in
//! `parser` may stop matching what the model actually emits.

/// Prompt for dataset discovery.
pub const SEARCH_PROMPT: &str = r#"You are an expert dataset researcher. For the query "{query}":

1. Generate a comprehensive list of high-quality, relevant datasets
2. Prioritize datasets based on:
   - Relevance to search query
   - Data recency
   - Credibility of source
   - Accessibility

Guidelines for dataset selection:
- Prefer open-source and publicly available datasets
- Include diverse sources (academic, government, research institutions)
- Provide direct, working download links
- Avoid paywalled or restricted access resources

Return ONLY a JSON array, with no surrounding prose and no whitespace outside string values. The array must contain 3 to 7 entries. Each entry must have exactly these fields:
- "name": dataset name
- "description": what the dataset contains, 50 to 200 characters
- "url": direct download or access link
- "domain": exactly one of "Academic", "Government", "Research", "Commercial"
- "use_cases": array of 2 to 5 short strings"#;

/// Render the search prompt for a query.
///
/// The query is substituted verbatim - no escaping, no trimming.
pub fn render_search_prompt(query: &str) -> String {
    SEARCH_PROMPT.replace("{query}", query)
}
