use crate::utils::error::FactsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 單筆數字事實
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactItem {
    pub id: String,
    pub text: String,
}

impl FactItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// 後端回傳結果：Ok 為成功（可為空列表），Err 為失敗
pub type FetchResult = std::result::Result<Vec<FactItem>, FactsError>;

/// 推送給畫面的狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationState {
    Success,
    Error(String),
}

/// 使用者輸入的數字，字串或整數皆可
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberQuery(String);

impl NumberQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NumberQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NumberQuery {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NumberQuery {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! number_query_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NumberQuery {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

number_query_from_int!(i32, i64, u32, u64);
