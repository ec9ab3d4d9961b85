use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use quiz_core::model::RawQuestion;

use crate::error::ProviderError;

pub const DEFAULT_BASE_URL: &str = "https://the-trivia-api.com/v2";
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_FETCH_ATTEMPTS: usize = 3;

/// Where questions come from and how patiently to wait for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub batch_size: usize,
    pub fetch_timeout: Duration,
    pub fetch_attempts: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            fetch_attempts: DEFAULT_FETCH_ATTEMPTS,
        }
    }
}

impl ProviderConfig {
    /// Read `QUIZ_API_BASE_URL`, `QUIZ_BATCH_SIZE`, `QUIZ_FETCH_TIMEOUT_SECS` and
    /// `QUIZ_FETCH_ATTEMPTS`, falling back to defaults for missing or invalid values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let positive = |key: &str| {
            lookup(key)
                .and_then(|raw| raw.trim().parse::<usize>().ok())
                .filter(|value| *value > 0)
        };

        let base_url = lookup("QUIZ_API_BASE_URL")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or(defaults.base_url);

        Self {
            base_url,
            batch_size: positive("QUIZ_BATCH_SIZE").unwrap_or(defaults.batch_size),
            fetch_timeout: positive("QUIZ_FETCH_TIMEOUT_SECS")
                .and_then(|secs| u64::try_from(secs).ok())
                .map_or(defaults.fetch_timeout, Duration::from_secs),
            fetch_attempts: positive("QUIZ_FETCH_ATTEMPTS").unwrap_or(defaults.fetch_attempts),
        }
    }
}

/// Supplies raw question batches. The session never sees how.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Fetch up to `limit` raw question records.
    async fn fetch_batch(&self, limit: usize) -> Result<Vec<RawQuestion>, ProviderError>;
}

/// HTTP provider for the trivia API (`GET {base_url}/questions?limit=N`).
#[derive(Clone, Debug)]
pub struct TriviaApiProvider {
    client: Client,
    base_url: String,
}

impl TriviaApiProvider {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    #[must_use]
    pub fn questions_url(&self) -> String {
        format!("{}/questions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl QuestionProvider for TriviaApiProvider {
    async fn fetch_batch(&self, limit: usize) -> Result<Vec<RawQuestion>, ProviderError> {
        let response = self
            .client
            .get(self.questions_url())
            .query(&[("limit", limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| ProviderError::Decode(err.to_string()))
    }
}

/// Serves a fixed batch from memory. Used by tests and the offline mode.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    questions: Vec<RawQuestion>,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new(questions: Vec<RawQuestion>) -> Self {
        Self { questions }
    }

    /// A small built-in batch for playing without network access.
    #[must_use]
    pub fn sample() -> Self {
        let general = |text: &str, correct: &str, wrong: [&str; 3]| {
            RawQuestion::new(text, correct, wrong).with_category("general_knowledge")
        };
        Self::new(vec![
            general(
                "What is the capital of France?",
                "Paris",
                ["London", "Berlin", "Madrid"],
            ),
            general(
                "Which planet is known as the Red Planet?",
                "Mars",
                ["Venus", "Jupiter", "Mercury"],
            ),
            general(
                "What is the largest ocean on Earth?",
                "Pacific Ocean",
                ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean"],
            ),
            general(
                "How many sides does a hexagon have?",
                "Six",
                ["Five", "Seven", "Eight"],
            ),
            general(
                "Which element has the chemical symbol 'O'?",
                "Oxygen",
                ["Gold", "Osmium", "Oganesson"],
            ),
            general(
                "Who wrote 'Romeo and Juliet'?",
                "William Shakespeare",
                ["Charles Dickens", "Jane Austen", "Mark Twain"],
            ),
            general(
                "What is the hardest natural substance?",
                "Diamond",
                ["Quartz", "Granite", "Iron"],
            ),
            general(
                "Which country hosted the 2016 Summer Olympics?",
                "Brazil",
                ["China", "United Kingdom", "Japan"],
            ),
            general(
                "What is the smallest prime number?",
                "2",
                ["0", "1", "3"],
            ),
            general(
                "In which continent is the Sahara Desert?",
                "Africa",
                ["Asia", "Australia", "South America"],
            ),
        ])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[async_trait]
impl QuestionProvider for InMemoryProvider {
    async fn fetch_batch(&self, limit: usize) -> Result<Vec<RawQuestion>, ProviderError> {
        Ok(self.questions.iter().take(limit).cloned().collect())
    }
}
