use thiserror::Error;

use crate::integrity::IntegrityIssue;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("snapshot has {count} integrity issue(s), first: {first}")]
    Inconsistent { count: usize, first: IntegrityIssue },
}
