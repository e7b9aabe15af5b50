//! The search pipeline: prompt rendering, response parsing, record
//! validation, and the searcher that runs the stages in order.

pub mod parser;
pub mod prompt;
pub mod searcher;
pub mod validator;

pub use parser::parse_response;
pub use prompt::{render_search_prompt, SEARCH_PROMPT};
pub use searcher::Searcher;
pub use validator::{validate_record, ValidRecord};
