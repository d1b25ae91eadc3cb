//! Result types and derived summaries
//!
//! - Detection and rate-summary records
//! - The rounded external report
//! - Rate/interval summarization

pub mod result;
pub mod summary;
