use clap::Parser;
use valid_words::core::ConfigProvider;
use valid_words::utils::logger;
use valid_words::{BatchOrchestrator, CliConfig, HttpClient, TracingReporter, Validator};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.to_run_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let client = HttpClient::new(config.validator_endpoint());
    let validator = Validator::new(client.clone());
    let orchestrator = BatchOrchestrator::new(client, validator, config, TracingReporter);

    match orchestrator.run().await {
        Ok(summary) => {
            println!(
                "✅ {} of {} words accepted, saved to {}",
                summary.accepted_count,
                summary.candidate_count,
                summary.output_path.display()
            );
        }
        Err(e) => {
            tracing::error!(
                "Word list generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
