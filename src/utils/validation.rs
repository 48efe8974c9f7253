use crate::domain::model::NumberQuery;
use crate::utils::error::{FactsError, Result};
use url::Url;

pub const EMPTY_NUMBER_MESSAGE: &str = "entered number is empty";

pub const FACT_TYPES: [&str; 4] = ["trivia", "math", "date", "year"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FactsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FactsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FactsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(FactsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_fact_type(field_name: &str, fact_type: &str) -> Result<()> {
    if !FACT_TYPES.contains(&fact_type) {
        return Err(FactsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: fact_type.to_string(),
            reason: format!("Unsupported fact type. Valid types: {}", FACT_TYPES.join(", ")),
        });
    }
    Ok(())
}

/// 只拒絕空字串，其餘原樣交給後端
pub fn validate_number_query(query: &NumberQuery) -> Result<&str> {
    let number = query.as_str();
    if number.is_empty() {
        return Err(FactsError::ValidationError {
            message: EMPTY_NUMBER_MESSAGE.to_string(),
        });
    }
    Ok(number)
}
