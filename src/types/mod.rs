//! Plain data shared by the search backends, the session and the UI.

mod highlight;
mod search_result;

pub(crate) use highlight::{char_positions, highlight_line};
pub(crate) use search_result::SearchResponse;
pub use search_result::{NO_URL, SearchResult, UNTITLED};
