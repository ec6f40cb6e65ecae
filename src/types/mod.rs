pub mod answer;
pub mod identifiers;
pub mod query;

pub use answer::{Answer, AnswerMetadata, RankedFile, RankedSentence};
pub use identifiers::{DocumentId, DocumentIdError, DocumentVersion};
pub use query::Query;
