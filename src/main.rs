use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use gopt::action::Action;
use gopt::app::App;
use gopt::command::{execute_command, Command, Services};
use gopt::config::AppConfig;
use gopt::domain::catalog::{GroqCatalog, ModelCatalog};
use gopt::domain::store::{ConfigStore, FileStore};
use gopt::domain::types::ConfigRecord;
use gopt::{ui, update};

#[derive(Parser)]
#[command(name = "gopt")]
#[command(about = "gopt - Edit the API key, model and saved prompts of the Groq assistant")]
struct Cli {
    /// Options file (defaults to $GOPT_HOME/options.json)
    #[arg(long, env = "GOPT_STORE")]
    store: Option<PathBuf>,

    /// Model catalog endpoint
    #[arg(long, env = "GOPT_CATALOG_URL")]
    catalog_url: Option<String>,

    /// Log file (defaults to $GOPT_HOME/gopt.log)
    #[arg(long, env = "GOPT_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored options with the API key masked
    Show,
    /// List the models the catalog offers for the stored API key
    Models,
    /// Print the path of the options file
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.store, cli.catalog_url, cli.log_file)?;
    let _log_guard = init_logging(&config.log_file)?;

    let services = Services {
        store: FileStore::new(&config.store_path),
        catalog: GroqCatalog::new(&config.catalog_url),
    };

    match cli.command {
        Some(Commands::Path) => {
            println!("{}", config.store_path.display());
            Ok(())
        }
        Some(Commands::Show) => show_options(&services).await,
        Some(Commands::Models) => list_models(&services).await,
        None => run_tui(&services).await,
    }
}

fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("Log path {} has no file name", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    let filter = EnvFilter::try_from_env("GOPT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    Ok(guard)
}

async fn show_options<S: ConfigStore, C>(services: &Services<S, C>) -> Result<()> {
    let record = services
        .store
        .get(&ConfigRecord::defaults_from_env())
        .await
        .context("Failed to read options")?;
    let json = serde_json::to_string_pretty(&record.masked()).context("Failed to encode options")?;
    println!("{}", json);
    Ok(())
}

async fn list_models<S: ConfigStore, C: ModelCatalog>(services: &Services<S, C>) -> Result<()> {
    let record = services
        .store
        .get(&ConfigRecord::defaults_from_env())
        .await
        .context("Failed to read options")?;
    let models = services
        .catalog
        .fetch_models(&record.api_key)
        .await
        .context("Failed to fetch models")?;

    for model in models {
        println!("{}", model.id);
    }
    Ok(())
}

async fn run_tui<S: ConfigStore, C: ModelCatalog>(services: &Services<S, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(ConfigRecord::defaults_from_env());
    let result = run_app(&mut terminal, &mut app, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<S: ConfigStore, C: ModelCatalog>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    services: &Services<S, C>,
) -> Result<()> {
    let mut pending: VecDeque<Command> = update::init(app).into();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Commands run one at a time; the screen shows their loading state meanwhile.
        if let Some(command) = pending.pop_front() {
            let action = execute_command(command, services).await;
            pending.extend(update::update(app, action));
            continue;
        }

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let action = Action::Input {
                        code: key.code,
                        modifiers: key.modifiers,
                    };
                    pending.extend(update::update(app, action));
                }
            }
        }

        pending.extend(update::update(app, Action::Tick));
    }

    Ok(())
}
