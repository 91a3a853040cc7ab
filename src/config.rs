use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_MEDIA_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub media_base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, media_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: trim_trailing_slash(api_base_url.into()),
            media_base_url: trim_trailing_slash(media_base_url.into()),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let api_base_url =
            env::var("GRANDVIEW_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let media_base_url =
            env::var("GRANDVIEW_MEDIA_URL").unwrap_or_else(|_| DEFAULT_MEDIA_URL.to_string());
        let timeout = env::var("GRANDVIEW_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));
        Ok(Self {
            api_base_url: trim_trailing_slash(api_base_url),
            media_base_url: trim_trailing_slash(media_base_url),
            timeout,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ClientConfig::new("http://localhost:8000/api/", "http://localhost:8000//");
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.media_base_url, "http://localhost:8000");
    }
}
