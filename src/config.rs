use chrono::Offset;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub logger_timezone: chrono::FixedOffset,
    pub verbose: bool,
    pub fake_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            logger_timezone: local_offset(),
            verbose: false,
            fake_delay: Duration::from_millis(800),
        }
    }
}

impl Config {
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_url.trim_end_matches('/'))
    }
}

fn local_offset() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_predict_url_appends_route() {
        let config = Config {
            api_url: "http://classifier.local:8080".to_string(),
            ..Config::default()
        };
        assert_eq!(config.predict_url(), "http://classifier.local:8080/predict");
    }

    #[test]
    fn test_predict_url_ignores_trailing_slash() {
        let config = Config {
            api_url: "http://classifier.local/api/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.predict_url(), "http://classifier.local/api/predict");
    }
}
