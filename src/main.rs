use app_console::AppConsole;
use classifier_service::impl_fake::ClassifierServiceFake;
use classifier_service::impl_http::ClassifierServiceHttp;
use classifier_service::interface::ClassifierService;
use clap::{Parser, Subcommand};
use config::{Config, DEFAULT_API_URL};
use display::impl_console::DisplayConsole;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use predictor::core::PredictionResult;
use predictor::main::Predictor;
use preview_store::impl_memory::PreviewStoreMemory;
use std::path::PathBuf;
use std::sync::Arc;

mod app_console;
mod app_gui;
mod classifier_service;
mod config;
mod display;
mod library;
mod predictor;
mod preview_store;

#[derive(Parser, Debug)]
#[command(
    name = "dog-breed-predictor",
    about = "Upload a dog photo and ask the classifier service for its breed"
)]
struct Cli {
    /// Base URL of the classifier service; requests go to `<url>/predict`.
    #[arg(long, env = "BREED_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Answer with random breeds instead of calling the service.
    #[arg(long)]
    fake: bool,

    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the upload form (default).
    Gui,
    /// Submit one image and print the result.
    Predict { image: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        verbose: cli.verbose,
        ..Config::default()
    };

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone, config.verbose));

    let classifier: Arc<dyn ClassifierService + Send + Sync> = if cli.fake {
        Arc::new(ClassifierServiceFake::new(logger.clone(), config.fake_delay))
    } else {
        Arc::new(ClassifierServiceHttp::new(&config, logger.clone())?)
    };

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => app_gui::run(logger, classifier)?,
        Command::Predict { image } => {
            let previews = Arc::new(PreviewStoreMemory::new());
            let predictor = Predictor::new(logger, classifier, previews.clone(), Arc::new(|| {}));
            let mut app = AppConsole::new(predictor, DisplayConsole::stdout(previews));

            if let PredictionResult::Failure { error } = app.run(&image)? {
                return Err(error.into());
            }
        }
    }

    Ok(())
}
