use clap::Parser;
use number_facts::utils::{logger, validation::Validate};
use number_facts::{
    CliConfig, ConfigProvider, ConsoleDisplay, FactsError, NumbersApiBackend, NumbersCoordinator,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting number-facts CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let numbers = config.numbers.clone();
    let random = config.random;

    match config.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            tracing::info!(
                "🔧 TOML source overrides --api-endpoint, --fact-type, --timeout-seconds and --initial-numbers"
            );
            let toml_config = match TomlConfig::from_file(&path) {
                Ok(toml_config) => toml_config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            run(toml_config, numbers, random).await
        }
        None => run(config, numbers, random).await,
    }
}

async fn run<C>(config: C, numbers: Vec<String>, random: usize) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        report_invalid_config(&e);
        std::process::exit(1);
    }

    tracing::info!(
        "🔢 Using {} ({} facts)",
        config.api_endpoint(),
        config.fact_type()
    );

    let backend = NumbersApiBackend::new(config);
    let mut coordinator = NumbersCoordinator::new(backend, ConsoleDisplay::new());

    coordinator.init(true).await;
    for number in numbers {
        coordinator.fetch_fact(number).await;
    }
    for _ in 0..random {
        coordinator.fetch_random_number_data().await;
    }

    tracing::info!(
        "✅ Done, {} fact(s) displayed",
        coordinator.display().displayed_count()
    );
    Ok(())
}

fn report_invalid_config(e: &FactsError) {
    tracing::error!("❌ Configuration validation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
}
