//! Questions, answers and the flow that connects them

pub mod answers;
pub mod catalogue;
pub mod flow;
pub mod question;

pub use answers::AnswerMap;
pub use flow::{DisplayMode, FlowController, FlowError, FlowState, View, run_submission};
pub use question::{MAX_OPTIONS, MIN_OPTIONS, Question, QuestionSet, QuestionSetError};
