use clap::Parser;
use data_filter::core::ConfigProvider;
use data_filter::utils::{logger, validation::Validate};
use data_filter::{CliConfig, FilterEngine, FilterError, FilterPipeline, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting data-filter");
    tracing::debug!("CLI config: {:?}", config);

    if let Some(path) = config.config.clone() {
        tracing::info!("Loading configuration from: {}", path.display());
        let file_config = match TomlConfig::from_file(&path) {
            Ok(file_config) => file_config,
            Err(e) => fail(&e),
        };
        if let Err(e) = file_config.validate() {
            fail(&e);
        }
        file_config.apply_to(&mut config);
        tracing::debug!("Effective config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let mode = config.statistics();
    let pipeline = FilterPipeline::new(LocalStorage::new(), config);
    let engine = FilterEngine::new(pipeline);

    let summary = match engine.run().await {
        Ok(summary) => summary,
        Err(e) => fail(&e),
    };

    if let Some(report) = data_filter::render(mode, &summary.partition) {
        println!("{}", report);
    }

    if let Err(e) = summary.load.ensure_complete() {
        fail(&e);
    }

    tracing::info!("Filter run completed");
}

fn fail(e: &FilterError) -> ! {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code())
}
