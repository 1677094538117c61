//! Search execution and result assembly.

pub mod results;
pub mod searcher;

pub use self::results::{LemmaSearchResult, SearchResult, NO_PART};
pub use self::searcher::Searcher;
