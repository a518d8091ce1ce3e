use crate::config::{SearchConfig, QUERY_PLACEHOLDER};
use crate::truncate::truncate_chars;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Url};
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// Connect, DNS, TLS, body read or non-2xx status.
    #[error("Error performing search: {}", error_chain(.0))]
    Transport(#[from] reqwest::Error),
    /// URL construction or body decoding.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SearchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Transport(_))
    }
}

/// reqwest keeps the useful part ("connection refused", ...) in its sources.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub text: String,
    pub truncated: bool,
}

pub struct QueryFetcher {
    client: Client,
    config: SearchConfig,
}

impl QueryFetcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Percent-encode `query` into the configured template.
    pub fn build_url(&self, query: &str) -> Result<Url, SearchError> {
        let encoded = urlencoding::encode(query);
        let raw = self.config.url_template.replace(QUERY_PLACEHOLDER, &encoded);
        Url::parse(&raw)
            .map_err(|e| SearchError::Unexpected(format!("invalid URL '{}': {}", raw, e)))
    }

    pub async fn fetch(&self, query: &str) -> Result<Fetched, SearchError> {
        let url = self.build_url(query)?;
        let body = self
            .client
            .get(url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let text = String::from_utf8(body.to_vec())
            .map_err(|e| SearchError::Unexpected(format!("response is not valid UTF-8: {}", e)))?;

        let truncated = truncate_chars(&text, self.config.max_chars);
        Ok(Fetched {
            text: truncated.content,
            truncated: truncated.was_truncated,
        })
    }

    /// Like [`fetch`](Self::fetch), with errors rendered into the returned text.
    pub async fn query(&self, query: &str) -> String {
        render(self.fetch(query).await)
    }
}

/// Flatten a fetch outcome into the text printed for the user.
pub fn render(result: Result<Fetched, SearchError>) -> String {
    match result {
        Ok(fetched) => fetched.text,
        Err(e) => e.to_string(),
    }
}
