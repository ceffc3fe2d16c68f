mod document;
mod error;
mod lenient;
mod posting;

pub use document::{parse_postings, Format, PostingDocument};
pub use error::PostingError;
pub use posting::{
  ApplicationInfo, PostingRecord, Qualifications, ScalarValue, TeamStructure, TextOrList,
};
