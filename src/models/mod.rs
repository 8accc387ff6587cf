pub mod category;
pub mod import;
pub mod loaders;
pub mod record;

pub use category::CategoryLookup;
pub use import::{CreateQuestionPayload, ImportCandidate, QuestionStatus, ShapeType};
pub use loaders::load_category_file;
pub use record::{ExtractedRecord, QuestionOptions};
