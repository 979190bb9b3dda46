pub mod block;
pub mod question;

pub use block::TextBlock;
pub use question::{OptionRecord, QuestionRecord};
