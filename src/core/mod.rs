// Public modules
pub mod error;
pub mod plan;
pub mod rewrite;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use plan::{RewritePlan, RuleConfig};
pub use rewrite::{FileOutcome, FileReport, RunReport, WriteMode};
