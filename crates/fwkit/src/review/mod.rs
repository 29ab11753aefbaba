pub mod category;
pub mod classifier;
pub mod session;

pub use category::RuleCategory;
pub use classifier::{ClassifiedRule, RuleClassifier};
pub use session::{export_filename, ReviewSession, ReviewStore, SessionId};
