mod issue;
mod rollout;

pub use issue::{Issue, IssueList};
pub use rollout::{Rollout, RolloutTask};
