//! Literal text rewriting across a fixed list of files.
//!
//! A `RuleSet` folds each file's text through its rules in order; the batch
//! driver reads each listed file once, writes it back at most once, and
//! classifies it as modified, unchanged or not found.

mod batch;
mod matcher;
mod processor;
mod rules;

pub use batch::{run, RunReport};
pub use matcher::{MatchKind, Matcher};
pub use processor::{process_file, FileOutcome, FileReport, WriteMode};
pub use rules::{Rule, RuleHit, RuleSet, Rewritten};
