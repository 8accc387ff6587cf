pub mod question_client;
pub mod session;

pub use question_client::{QuestionClient, QuestionSink};
pub use session::{AccessEntry, Session};
