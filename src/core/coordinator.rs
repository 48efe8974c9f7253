use crate::core::presentation::present;
use crate::domain::model::{FetchResult, NumberQuery, PresentationState};
use crate::domain::ports::{DisplaySurface, FactsBackend};
use crate::utils::validation::validate_number_query;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListPush {
    /// 成功時一律推送，空列表也推（初始化畫面）
    Always,
    /// 只在後端回傳至少一筆時推送（查詢與隨機）
    NonEmpty,
}

/// 協調後端與畫面：顯示讀取中、等待後端、推送狀態與列表
pub struct NumbersCoordinator<B: FactsBackend, D: DisplaySurface> {
    backend: B,
    display: D,
    has_displayed_list: bool,
}

impl<B: FactsBackend, D: DisplaySurface> NumbersCoordinator<B, D> {
    pub fn new(backend: B, display: D) -> Self {
        Self {
            backend,
            display,
            has_displayed_list: false,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub async fn init(&mut self, is_first_run: bool) {
        if !is_first_run {
            tracing::debug!(
                has_displayed_list = self.has_displayed_list,
                "Skipping init, not the first run"
            );
            return;
        }

        tracing::debug!("Initializing number facts");
        let result = with_progress(&self.display, self.backend.init()).await;
        self.publish(result, ListPush::Always);
    }

    pub async fn fetch_random_number_data(&mut self) {
        tracing::debug!("Fetching fact about a random number");
        let result = with_progress(&self.display, self.backend.fact_about_random_number()).await;
        self.publish(result, ListPush::NonEmpty);
    }

    pub async fn fetch_fact(&mut self, number: impl Into<NumberQuery>) {
        let query = number.into();
        let number = match validate_number_query(&query) {
            Ok(number) => number,
            Err(e) => {
                tracing::warn!("Rejected number input: {}", e);
                self.display
                    .show_state(PresentationState::Error(e.user_friendly_message()));
                return;
            }
        };

        tracing::debug!("Fetching fact about {}", number);
        let result = with_progress(&self.display, self.backend.fact_about_number(number)).await;
        self.publish(result, ListPush::NonEmpty);
    }

    /// 先推狀態再推列表；`init` 用 `Always`，其他查詢用 `NonEmpty`
    fn publish(&mut self, result: FetchResult, push: ListPush) {
        self.display.show_state(present(&result));

        match result {
            Ok(items) => {
                tracing::debug!("Backend returned {} fact(s)", items.len());
                if items.is_empty() && push == ListPush::NonEmpty {
                    return;
                }
                let populated = !items.is_empty();
                self.display.show_list(items);
                if populated {
                    self.has_displayed_list = true;
                }
            }
            Err(e) => {
                tracing::warn!("Fetching number fact failed: {}", e);
            }
        }
    }
}

async fn with_progress<D, F>(display: &D, fetch: F) -> FetchResult
where
    D: DisplaySurface,
    F: Future<Output = FetchResult>,
{
    display.show_progress(true);
    let result = fetch.await;
    display.show_progress(false);
    result
}
