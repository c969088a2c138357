use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use serde_json::Value;
use uuid::Uuid;

use super::{output_value, ActionHost};
use crate::error::{ActionError, Result};

/// Host adapter for the GitHub Actions runner.
///
/// Inputs arrive as `INPUT_<NAME>` environment variables, outputs are appended
/// to the file named by `GITHUB_OUTPUT`, and log lines are written to stdout
/// as plain text or workflow commands.
pub struct GithubActionsHost {
    inputs: HashMap<String, String>,
    output_file: Option<PathBuf>,
}

impl GithubActionsHost {
    pub fn new(inputs: HashMap<String, String>, output_file: Option<PathBuf>) -> Self {
        Self {
            inputs,
            output_file,
        }
    }

    /// Capture inputs and the output file location from the process environment.
    pub fn from_env() -> Self {
        let inputs = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .filter_map(|(key, value)| key.strip_prefix("INPUT_").map(|name| (name.to_string(), value)))
            .collect();

        let output_file = std::env::var_os("GITHUB_OUTPUT")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self::new(inputs, output_file)
    }

    /// Override an input, e.g. from a command-line flag.
    pub fn with_input(mut self, name: &str, value: impl Into<String>) -> Self {
        self.inputs.insert(input_key(name), value.into());
        self
    }

    /// Report the run as failed.
    pub fn error(&self, message: &str) {
        println!("{}", workflow_command("error", message));
    }
}

impl ActionHost for GithubActionsHost {
    fn get_input(&self, name: &str, required: bool) -> Result<String> {
        let value = self
            .inputs
            .get(&input_key(name))
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        if required && value.is_empty() {
            return Err(ActionError::MissingInput(name.to_string()));
        }

        Ok(value)
    }

    fn set_output(&self, name: &str, value: &Value) -> Result<()> {
        let value = output_value(value);

        match &self.output_file {
            Some(path) => {
                let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
                let entry = file_command_entry(name, &value, &delimiter)?;

                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(entry.as_bytes())?;
            }
            None => {
                println!();
                println!(
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(&value)
                );
            }
        }

        Ok(())
    }

    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn warning(&self, message: &str) {
        println!("{}", workflow_command("warning", message));
    }
}

fn input_key(name: &str) -> String {
    name.replace(' ', "_").to_uppercase()
}

/// Heredoc-style entry understood by the runner's file commands.
fn file_command_entry(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(ActionError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("output {name} contains the delimiter {delimiter}"),
        )));
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn workflow_command(command: &str, message: &str) -> String {
    format!("::{command}::{}", escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
