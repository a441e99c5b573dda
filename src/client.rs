use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;

use crate::cliopt::Credentials;
use crate::error::Result;
use crate::model::SubscriberCount;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE_URL: &str = "https://oauth.reddit.com";

pub const SUBREDDIT: &str = "indianrailways";

pub trait SubscriberSource {
    fn subscribers(&self) -> Result<SubscriberCount>;
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct AboutResponse {
    data: AboutData,
}

#[derive(Deserialize)]
struct AboutData {
    subscribers: Option<Value>,
}

pub struct RedditClient {
    agent: ureq::Agent,
    creds: Credentials,
}

impl RedditClient {
    pub fn new(creds: Credentials) -> Self {
        Self {
            agent: ureq::Agent::new(),
            creds,
        }
    }

    // Application-only grant: the client id/secret pair is the identity,
    // no user login involved.
    fn access_token(&self) -> Result<String> {
        let basic = STANDARD.encode(format!(
            "{}:{}",
            self.creds.client_id, self.creds.client_secret
        ));

        let resp: TokenResponse = self
            .agent
            .post(TOKEN_URL)
            .set("Authorization", &format!("Basic {}", basic))
            .set("User-Agent", &self.creds.user_agent)
            .send_form(&[("grant_type", "client_credentials")])
            .map_err(|e| ("access token request failed", e))?
            .into_json()
            .map_err(|e| ("malformed access token response", e))?;

        Ok(resp.access_token)
    }
}

impl SubscriberSource for RedditClient {
    fn subscribers(&self) -> Result<SubscriberCount> {
        let token = self.access_token()?;

        let about: AboutResponse = self
            .agent
            .get(&format!("{}/r/{}/about.json", API_BASE_URL, SUBREDDIT))
            .set("Authorization", &format!("bearer {}", token))
            .set("User-Agent", &self.creds.user_agent)
            .call()
            .map_err(|e| ("subreddit about request failed", e))?
            .into_json()
            .map_err(|e| ("malformed subreddit about response", e))?;

        validate_count(about.data.subscribers.as_ref())
    }
}

pub fn validate_count(raw: Option<&Value>) -> Result<SubscriberCount> {
    match raw {
        Some(value) => match value.as_i64() {
            Some(n) if n > 0 => Ok(n as SubscriberCount),
            _ => Err(format!("Invalid subscriber count: {}", value).into()),
        },
        None => Err("Invalid subscriber count: null".into()),
    }
}
