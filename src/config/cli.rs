use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_fact_type, validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "number-facts")]
#[command(about = "Fetch facts about numbers from the Numbers API")]
pub struct CliConfig {
    /// Numbers to fetch a fact about
    pub numbers: Vec<String>,

    #[arg(long, default_value = "http://numbersapi.com")]
    pub api_endpoint: String,

    /// One of trivia, math, date, year
    #[arg(long, default_value = "trivia")]
    pub fact_type: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    /// Numbers fetched when the session starts
    #[arg(long, value_delimiter = ',')]
    pub initial_numbers: Vec<String>,

    /// How many random-number facts to fetch
    #[arg(long, default_value = "0")]
    pub random: usize,

    /// Path to a TOML configuration file (overrides the source options above)
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn fact_type(&self) -> &str {
        &self.fact_type
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn initial_numbers(&self) -> &[String] {
        &self.initial_numbers
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_fact_type("fact_type", &self.fact_type)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
