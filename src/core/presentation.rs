use crate::domain::model::{FetchResult, PresentationState};

/// 後端失敗但沒有可顯示訊息時使用
pub const FETCH_FAILED_MESSAGE: &str = "unable to fetch number fact";

/// 將後端結果轉成畫面狀態，列表不放在狀態裡
pub fn present(result: &FetchResult) -> PresentationState {
    match result {
        Ok(_) => PresentationState::Success,
        Err(e) => {
            let message = e.user_friendly_message();
            if message.trim().is_empty() {
                PresentationState::Error(FETCH_FAILED_MESSAGE.to_string())
            } else {
                PresentationState::Error(message)
            }
        }
    }
}
