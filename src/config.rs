use url::Url;

use crate::error::{ActionError, Result};
use crate::host::ActionHost;

/// Inputs of a single run. All four are required.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub token: String,
    pub project_id: String,
    pub title: String,
}

impl Config {
    /// Read every input from the host, failing on the first one missing.
    pub fn from_host(host: &impl ActionHost) -> Result<Self> {
        Ok(Self {
            url: host.get_input("url", true)?,
            token: host.get_input("token", true)?,
            project_id: host.get_input("project-id", true)?,
            title: host.get_input("title", true)?,
        })
    }

    /// Base endpoint without a trailing slash, validated as an absolute URL.
    pub fn endpoint(&self) -> Result<String> {
        Url::parse(&self.url).map_err(|_| ActionError::InvalidUrl(self.url.clone()))?;
        Ok(self.url.trim_end_matches('/').to_string())
    }

    /// Link to the issue in the web console
    pub fn issue_link(&self, issue_uid: &str) -> Result<String> {
        Ok(format!(
            "{}/projects/{}/issues/{}",
            self.endpoint()?,
            self.project_id,
            issue_uid
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    const ALL_INPUTS: [(&str, &str); 4] = [
        ("url", "https://bb.example.com"),
        ("token", "secret"),
        ("project-id", "example"),
        ("title", "[bytebase/ci-example#6] chore: add migration files"),
    ];

    #[test]
    fn test_from_host_reads_all_inputs() {
        let host = RecordingHost::with_inputs(&ALL_INPUTS);
        let config = Config::from_host(&host).unwrap();
        assert_eq!(config.url, "https://bb.example.com");
        assert_eq!(config.token, "secret");
        assert_eq!(config.project_id, "example");
        assert_eq!(
            config.title,
            "[bytebase/ci-example#6] chore: add migration files"
        );
    }

    #[test]
    fn test_from_host_fails_on_each_missing_input() {
        for missing in ["url", "token", "project-id", "title"] {
            let inputs: Vec<(&str, &str)> = ALL_INPUTS
                .iter()
                .copied()
                .filter(|(name, _)| *name != missing)
                .collect();
            let host = RecordingHost::with_inputs(&inputs);

            match Config::from_host(&host) {
                Err(ActionError::MissingInput(name)) => assert_eq!(name, missing),
                other => panic!("expected missing {missing}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let host = RecordingHost::with_inputs(&ALL_INPUTS);
        let mut config = Config::from_host(&host).unwrap();
        config.url = "https://bb.example.com/".to_string();
        assert_eq!(config.endpoint().unwrap(), "https://bb.example.com");
    }

    #[test]
    fn test_endpoint_rejects_relative_url() {
        let host = RecordingHost::with_inputs(&ALL_INPUTS);
        let mut config = Config::from_host(&host).unwrap();
        config.url = "bb.example.com".to_string();
        assert!(matches!(config.endpoint(), Err(ActionError::InvalidUrl(_))));
    }

    #[test]
    fn test_issue_link() {
        let host = RecordingHost::with_inputs(&ALL_INPUTS);
        let config = Config::from_host(&host).unwrap();
        assert_eq!(
            config.issue_link("129").unwrap(),
            "https://bb.example.com/projects/example/issues/129"
        );
    }
}
