use serde::Serialize;
use serde_json::Value;

/// Rollout payload, passed through untouched.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Rollout(pub Value);

/// One task of a rollout stage, flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RolloutTask {
    pub stage: String,
    pub title: String,
    pub status: String,
}

impl Rollout {
    /// Tasks of every stage, in pipeline order. Missing fields read as empty.
    pub fn tasks(&self) -> Vec<RolloutTask> {
        let text = |v: &Value, key: &str| {
            v.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        self.0
            .get("stages")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .flat_map(|stage| {
                let stage_title = text(stage, "title");
                stage
                    .get("tasks")
                    .and_then(Value::as_array)
                    .into_iter()
                    .flatten()
                    .map(move |task| RolloutTask {
                        stage: stage_title.clone(),
                        title: text(task, "title"),
                        status: text(task, "status"),
                    })
            })
            .collect()
    }
}
