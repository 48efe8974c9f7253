use crate::domain::model::{FactItem, FetchResult};
use crate::domain::ports::{ConfigProvider, FactsBackend};
use crate::utils::error::{FactsError, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Mutex;

/// Numbers API 回應格式
#[derive(Debug, Deserialize)]
struct ApiFact {
    text: String,
    number: serde_json::Value,
    #[serde(default)]
    found: Option<bool>,
}

impl ApiFact {
    fn subject(&self) -> String {
        match &self.number {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct SessionHistory {
    seeded: bool,
    facts: Vec<FactItem>,
}

/// 透過 Numbers API 取得事實；本次執行取得的事實保存在記憶體中
pub struct NumbersApiBackend<C: ConfigProvider> {
    config: C,
    client: Client,
    history: Mutex<SessionHistory>,
}

impl<C: ConfigProvider> NumbersApiBackend<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
            history: Mutex::new(SessionHistory::default()),
        }
    }

    fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(self.config.api_endpoint()).map_err(|e| FactsError::ConfigError {
            message: format!("Invalid API endpoint '{}': {}", self.config.api_endpoint(), e),
        })?;

        url.path_segments_mut()
            .map_err(|_| FactsError::ConfigError {
                message: format!("API endpoint cannot be a base: {}", self.config.api_endpoint()),
            })?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("json", "true");

        Ok(url)
    }

    async fn request_fact(&self, url: Url) -> Result<ApiFact> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(FactsError::StatusError {
                status: status.as_u16(),
            });
        }

        let fact: ApiFact = response.json().await?;
        if fact.found == Some(false) {
            tracing::debug!("No specific fact for {}, API returned a default one", fact.subject());
        }
        Ok(fact)
    }

    async fn fetch_number(&self, number: &str) -> Result<FactItem> {
        let url = self.endpoint_url(&[number, self.config.fact_type()])?;
        let fact = self.request_fact(url).await?;
        Ok(FactItem::new(number, fact.text))
    }

    async fn fetch_random(&self) -> Result<FactItem> {
        let url = self.endpoint_url(&["random", self.config.fact_type()])?;
        let fact = self.request_fact(url).await?;
        Ok(FactItem::new(fact.subject(), fact.text))
    }

    async fn remember(&self, item: FactItem) -> Vec<FactItem> {
        self.history.lock().await.facts.push(item.clone());
        vec![item]
    }
}

#[async_trait]
impl<C: ConfigProvider> FactsBackend for NumbersApiBackend<C> {
    async fn init(&self) -> FetchResult {
        let mut history = self.history.lock().await;

        if !history.seeded {
            let mut seeded = Vec::with_capacity(self.config.initial_numbers().len());
            for number in self.config.initial_numbers() {
                seeded.push(self.fetch_number(number).await?);
            }
            tracing::info!("🌱 Seeded {} initial fact(s)", seeded.len());
            seeded.append(&mut history.facts);
            history.facts = seeded;
            history.seeded = true;
        }

        Ok(history.facts.clone())
    }

    async fn fact_about_number(&self, number: &str) -> FetchResult {
        let item = self.fetch_number(number).await?;
        Ok(self.remember(item).await)
    }

    async fn fact_about_random_number(&self) -> FetchResult {
        let item = self.fetch_random().await?;
        Ok(self.remember(item).await)
    }
}
