//! Boundary between the resolver and the CI platform it runs on.
//!
//! The resolver only ever talks to an [`ActionHost`]; the GitHub Actions
//! runner is one implementation, the in-memory recorder used by the tests is
//! another.

mod github;
#[cfg(test)]
mod recording;

use serde_json::Value;

use crate::error::Result;

pub use github::GithubActionsHost;
#[cfg(test)]
pub use recording::RecordingHost;

/// Named inputs, named outputs and log lines provided by the CI platform.
pub trait ActionHost {
    /// Read a named input. Fails when `required` is set and the input is
    /// absent or blank.
    fn get_input(&self, name: &str, required: bool) -> Result<String>;

    /// Publish a named output for downstream steps.
    fn set_output(&self, name: &str, value: &Value) -> Result<()>;

    fn info(&self, message: &str);

    fn warning(&self, message: &str);
}

/// Render an output value the way downstream steps read it: strings as-is,
/// everything else as compact JSON.
pub fn output_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
