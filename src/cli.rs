use clap::Parser;

use crate::host::GithubActionsHost;

#[derive(Parser)]
#[command(name = "get-issue")]
#[command(about = "Find the Bytebase issue created for a title and the rollout it spawned", version)]
#[command(after_help = "Inputs are read from INPUT_URL, INPUT_TOKEN, INPUT_PROJECT-ID and INPUT_TITLE
when running as a GitHub Action. Flags override them.

EXAMPLES:
    get-issue --url https://bytebase.example.com --token $TOKEN \\
        --project-id example --title \"[org/repo#6] chore: add migration files\"")]
pub struct Cli {
    /// Bytebase endpoint, e.g. https://bytebase.example.com
    #[arg(long)]
    pub url: Option<String>,

    /// Bearer token for the API
    #[arg(long)]
    pub token: Option<String>,

    /// Project the issue belongs to
    #[arg(long)]
    pub project_id: Option<String>,

    /// Exact issue title to look for
    #[arg(long)]
    pub title: Option<String>,

    /// Show debug logs and the full error chain
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Host backed by the process environment, with flags taking precedence.
    pub fn host(&self) -> GithubActionsHost {
        let overrides = [
            ("url", &self.url),
            ("token", &self.token),
            ("project-id", &self.project_id),
            ("title", &self.title),
        ];

        overrides
            .into_iter()
            .fold(GithubActionsHost::from_env(), |host, (name, value)| match value {
                Some(value) => host.with_input(name, value.clone()),
                None => host,
            })
    }
}
