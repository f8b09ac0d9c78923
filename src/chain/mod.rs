pub mod driver;
pub mod eligibility;
pub mod extract;
pub mod lexicon;

pub use driver::{ChainController, ChainOutcome, Notifier};
pub use eligibility::{decide, Eligibility};
pub use extract::extract_next_command;
