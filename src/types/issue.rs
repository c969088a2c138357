use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Issue exactly as returned by the API. The fields the resolver needs are
/// read on demand so the issue can be republished unchanged.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Issue(Map<String, Value>);

impl Issue {
    /// Only JSON objects are issues.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn uid(&self) -> Option<&str> {
        self.text("uid")
    }

    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        self.text("createTime")
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
    }

    /// UID of the linked rollout: the last segment of the `rollout` reference.
    pub fn rollout_uid(&self) -> Option<&str> {
        self.text("rollout")
            .filter(|r| !r.is_empty())
            .and_then(|r| r.rsplit('/').next())
    }
}

/// `GET /v1/projects/{project}/issues` response. Entries stay untyped until
/// one is selected.
#[derive(Deserialize, Debug)]
pub struct IssueList {
    #[serde(default)]
    issues: Option<Vec<Value>>,
}

impl IssueList {
    /// Object entries of the list; anything else cannot match a title.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
            .unwrap_or_default()
            .into_iter()
            .filter_map(Issue::from_value)
            .collect()
    }
}
