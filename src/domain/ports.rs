use crate::domain::model::{FactItem, FetchResult, PresentationState};
use async_trait::async_trait;

/// 取得數字事實的後端
#[async_trait]
pub trait FactsBackend: Send + Sync {
    async fn init(&self) -> FetchResult;
    async fn fact_about_number(&self, number: &str) -> FetchResult;
    async fn fact_about_random_number(&self) -> FetchResult;
}

/// 畫面輸出，只接收呼叫
pub trait DisplaySurface: Send + Sync {
    fn show_progress(&self, show: bool);
    fn show_state(&self, state: PresentationState);
    /// Appends to whatever is already displayed.
    fn show_list(&self, items: Vec<FactItem>);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn fact_type(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn initial_numbers(&self) -> &[String];
}
