//! Finds the issue created for a title and the rollout it spawned.

use tracing::debug;

use crate::client::BytebaseClient;
use crate::config::Config;
use crate::error::Result;
use crate::host::ActionHost;
use crate::output::{pretty, task_table};
use crate::types::{Issue, Rollout};

/// What a run published.
#[derive(Debug, Default)]
pub struct Resolution {
    pub issue: Option<Issue>,
    pub rollout: Option<Rollout>,
}

/// Read the inputs from the host and resolve. Nothing is requested until every
/// input is present.
pub async fn run(host: &impl ActionHost) -> Result<Resolution> {
    let config = Config::from_host(host)?;
    let client = BytebaseClient::new(&config)?;
    resolve(&client, &config, host).await
}

pub async fn resolve(
    client: &BytebaseClient,
    config: &Config,
    host: &impl ActionHost,
) -> Result<Resolution> {
    let issues = client.list_issues(&config.project_id).await?;
    debug!(count = issues.len(), project = %config.project_id, "listed issues");

    let matches = filter_by_title(issues, &config.title);
    if matches.len() > 1 {
        host.warning(&format!(
            "Found multiple issues for title {}. Use the latest one\n{}",
            config.title,
            pretty(&matches)
        ));
    }

    let mut matches = matches.into_iter();
    let Some(first) = matches.next() else {
        host.info(&format!("No issue found for title {}", config.title));
        return Ok(Resolution::default());
    };
    if matches.len() == 0 {
        host.info(&format!("Issue found for title {}", config.title));
    }
    let issue = select_latest(first, matches);

    host.info(&format!("Issue:\n{}", pretty(&issue)));
    host.set_output("issue", &issue.to_value())?;

    let mut rollout = None;
    if let Some(rollout_uid) = issue.rollout_uid() {
        debug!(%rollout_uid, "fetching rollout");
        let fetched = client.get_rollout(&config.project_id, rollout_uid).await?;

        host.info(&format!("Rollout:\n{}", pretty(&fetched)));
        host.set_output("rollout", &fetched.0)?;
        if let Some(table) = task_table(&fetched.tasks()) {
            host.info(&table);
        }

        rollout = Some(fetched);
    }

    if let Some(uid) = issue.uid() {
        host.info(&format!("Visit {}", config.issue_link(uid)?));
    }

    Ok(Resolution {
        issue: Some(issue),
        rollout,
    })
}

/// Issues whose title is exactly `title`. Case-sensitive, no normalization.
pub fn filter_by_title(issues: Vec<Issue>, title: &str) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|i| i.title() == Some(title))
        .collect()
}

/// The issue created last among `first` and `rest`. On equal timestamps the
/// earlier entry is kept, and any parseable `createTime` beats a missing or
/// malformed one.
pub fn select_latest(first: Issue, rest: impl IntoIterator<Item = Issue>) -> Issue {
    rest.into_iter().fold(first, |latest, candidate| {
        if created_after(&candidate, &latest) {
            candidate
        } else {
            latest
        }
    })
}

fn created_after(candidate: &Issue, current: &Issue) -> bool {
    match (candidate.created_at(), current.created_at()) {
        (Some(c), Some(l)) => c > l,
        (Some(_), None) => true,
        _ => false,
    }
}
