use structopt::StructOpt;

use crate::error::Result;

#[derive(Debug, StructOpt)]
#[structopt(name = "substats", about = "substats command line arguments")]
pub struct CliOpt {
    /// Reddit API client identifier.
    #[structopt(long = "client-id", env = "REDDIT_CLIENT_ID", hide_env_values = true)]
    pub client_id: String,

    /// Reddit API client secret.
    #[structopt(long = "client-secret", env = "REDDIT_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// User agent string reported to the Reddit API.
    #[structopt(
        long = "user-agent",
        env = "REDDIT_USER_AGENT",
        default_value = "SubStats/0.1 by u/rail_subscriber"
    )]
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl CliOpt {
    // The arg parser already rejects absent values; this catches the
    // present-but-empty case before any network activity.
    pub fn credentials(&self) -> Result<Credentials> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(
                "Missing REDDIT_CLIENT_ID or REDDIT_CLIENT_SECRET environment variable".into(),
            );
        }

        Ok(Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            user_agent: self.user_agent.clone(),
        })
    }
}
