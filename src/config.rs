use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Placeholder replaced by the percent-encoded query in a URL template.
pub const QUERY_PLACEHOLDER: &str = "{query}";

const BING_URL_TEMPLATE: &str = "https://r.jina.ai/https://www.bing.com/search?q={query}";
const BAIDU_URL_TEMPLATE: &str = "https://r.jina.ai/https://www.baidu.com/s?wd={query}";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown search engine '{0}' (expected 'bing' or 'baidu')")]
    UnknownEngine(String),
    #[error("invalid max chars '{0}' (expected a positive integer)")]
    InvalidMaxChars(String),
    #[error("URL template '{0}' has no {{query}} placeholder")]
    MissingPlaceholder(String),
}

/// Deployment variant. Each one carries its own endpoint, budget and prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    #[default]
    Bing,
    Baidu,
}

impl Engine {
    pub fn url_template(self) -> &'static str {
        match self {
            Engine::Bing => BING_URL_TEMPLATE,
            Engine::Baidu => BAIDU_URL_TEMPLATE,
        }
    }

    pub fn max_chars(self) -> usize {
        match self {
            Engine::Bing => 15000,
            Engine::Baidu => 5000,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Engine::Bing => "Please enter search content: ",
            Engine::Baidu => "请输入搜索内容: ",
        }
    }
}

impl FromStr for Engine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bing" => Ok(Engine::Bing),
            "baidu" => Ok(Engine::Baidu),
            _ => Err(ConfigError::UnknownEngine(s.to_string())),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Bing => write!(f, "bing"),
            Engine::Baidu => write!(f, "baidu"),
        }
    }
}

/// What the fetcher needs to build and send one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub url_template: String,
    pub max_chars: usize,
    pub user_agent: String,
}

impl SearchConfig {
    pub fn for_engine(engine: Engine) -> Self {
        Self {
            url_template: engine.url_template().to_string(),
            max_chars: engine.max_chars(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn with_url_template(mut self, template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into();
        if !template.contains(QUERY_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder(template));
        }
        self.url_template = template;
        Ok(self)
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::for_engine(Engine::default())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub engine: Engine,
    pub search: SearchConfig,
    pub verbose: bool,
}

impl Config {
    /// Reads `SEARCH_*` variables. Invalid values fall back to the engine
    /// defaults; the problems are returned so the caller can report them.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();

        let engine = match lookup("SEARCH_ENGINE").filter(|s| !s.trim().is_empty()) {
            Some(value) => value.parse::<Engine>().unwrap_or_else(|e| {
                problems.push(e);
                Engine::default()
            }),
            None => Engine::default(),
        };

        let mut search = SearchConfig::for_engine(engine);

        if let Some(template) = lookup("SEARCH_URL_TEMPLATE").filter(|s| !s.trim().is_empty()) {
            match search.clone().with_url_template(template.trim()) {
                Ok(updated) => search = updated,
                Err(e) => problems.push(e),
            }
        }

        if let Some(raw) = lookup("SEARCH_MAX_CHARS").filter(|s| !s.trim().is_empty()) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => search = search.with_max_chars(n),
                _ => problems.push(ConfigError::InvalidMaxChars(raw)),
            }
        }

        let verbose = lookup("SEARCH_VERBOSE")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        (
            Self {
                engine,
                search,
                verbose,
            },
            problems,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_bing_variant() {
        let (config, problems) = Config::from_lookup(lookup_from(&[]));
        assert!(problems.is_empty());
        assert_eq!(config.engine, Engine::Bing);
        assert_eq!(config.search.max_chars, 15000);
        assert_eq!(config.search.url_template, BING_URL_TEMPLATE);
        assert_eq!(config.search.user_agent, USER_AGENT);
        assert!(!config.verbose);
    }

    #[test]
    fn baidu_variant_has_smaller_budget() {
        let (config, problems) = Config::from_lookup(lookup_from(&[("SEARCH_ENGINE", "Baidu")]));
        assert!(problems.is_empty());
        assert_eq!(config.engine, Engine::Baidu);
        assert_eq!(config.search.max_chars, 5000);
        assert_eq!(config.search.url_template, BAIDU_URL_TEMPLATE);
    }

    #[test]
    fn overrides_apply_on_top_of_engine() {
        let (config, problems) = Config::from_lookup(lookup_from(&[
            ("SEARCH_ENGINE", "baidu"),
            ("SEARCH_URL_TEMPLATE", "http://127.0.0.1:9000/s?q={query}"),
            ("SEARCH_MAX_CHARS", "42"),
            ("SEARCH_VERBOSE", "yes"),
        ]));
        assert!(problems.is_empty());
        assert_eq!(config.search.url_template, "http://127.0.0.1:9000/s?q={query}");
        assert_eq!(config.search.max_chars, 42);
        assert!(config.verbose);
    }

    #[test]
    fn invalid_values_fall_back_and_are_reported() {
        let (config, problems) = Config::from_lookup(lookup_from(&[
            ("SEARCH_ENGINE", "altavista"),
            ("SEARCH_URL_TEMPLATE", "http://example.com/search"),
            ("SEARCH_MAX_CHARS", "0"),
        ]));
        assert_eq!(config.engine, Engine::Bing);
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(
            problems,
            vec![
                ConfigError::UnknownEngine("altavista".to_string()),
                ConfigError::MissingPlaceholder("http://example.com/search".to_string()),
                ConfigError::InvalidMaxChars("0".to_string()),
            ]
        );
    }
}
