pub mod constants;
pub mod detail;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod selectors;
pub mod slug;
pub mod types;
