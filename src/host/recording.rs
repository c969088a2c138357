use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use super::ActionHost;
use crate::error::{ActionError, Result};

/// In-memory host that records everything the resolver publishes.
#[derive(Default)]
pub struct RecordingHost {
    inputs: HashMap<String, String>,
    pub outputs: RefCell<Vec<(String, Value)>>,
    pub infos: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
}

impl RecordingHost {
    pub fn with_inputs(inputs: &[(&str, &str)]) -> Self {
        Self {
            inputs: inputs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn output(&self, name: &str) -> Option<Value> {
        self.outputs
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    pub fn logged(&self, needle: &str) -> bool {
        self.infos.borrow().iter().any(|line| line.contains(needle))
    }
}

impl ActionHost for RecordingHost {
    fn get_input(&self, name: &str, required: bool) -> Result<String> {
        let value = self.inputs.get(name).cloned().unwrap_or_default();
        if required && value.is_empty() {
            return Err(ActionError::MissingInput(name.to_string()));
        }
        Ok(value)
    }

    fn set_output(&self, name: &str, value: &Value) -> Result<()> {
        self.outputs
            .borrow_mut()
            .push((name.to_string(), value.clone()));
        Ok(())
    }

    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
