use clap::Parser;
use unfollow_planner::utils::{logger, validation::Validate};
use unfollow_planner::{
    CliConfig, ConfigProvider, LocalStorage, PlannerEngine, PlannerError, RunReport, TomlConfig,
    UnfollowPipeline,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting unfollow-planner");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(mut config) => {
                    if cli.dry_run {
                        config.set_dry_run(true);
                    }
                    run(config).await
                }
                Err(e) => Err(e),
            }
        }
        None => run(cli.clone()).await,
    };

    match result {
        Ok(report) => print!("{}", report.render()),
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("{}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<RunReport, PlannerError> {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(e);
    }

    // Relative paths resolve against the working directory.
    let storage = LocalStorage::new(".".to_string());
    let engine = PlannerEngine::new(UnfollowPipeline::new(storage, config));
    engine.run().await
}
