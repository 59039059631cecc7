//! CLI entrypoint for Lunch Roulette
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use roulette_application::{
    AutoAcceptVotes, AutoRejectVotes, ChooseRestaurantInput, ChooseRestaurantUseCase,
    DecisionLogger, ManageRecordsUseCase, NoDecisionLogger, QuickDecisionUseCase, RecordStore,
    SelectionParams, VotePort,
};
use roulette_domain::{NewPerson, RecordId};
use roulette_infrastructure::{
    ConfigLoader, FileConfig, InMemoryRecordStore, JsonFileRecordStore, JsonlDecisionLogger,
};
use roulette_presentation::{
    AutoVote, ChooseArgs, Cli, Command, ConsoleFormatter, ConsoleSelectionNotifier, FilterArgs,
    InteractiveVotePrompt, OutputConfig, PeopleCommand, RestaurantsCommand,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// `--data-dir` value selecting the throwaway in-memory store
const MEMORY_STORE: &str = ":memory:";

/// Everything a command handler needs, built once from config and flags
struct App {
    store: Arc<dyn RecordStore>,
    logger: Arc<dyn DecisionLogger>,
    params: SelectionParams,
    output: OutputConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, config.log.resolve_file().as_deref())?;

    info!("Starting Lunch Roulette");

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .unwrap_or_else(|| config.output.parse_format().0),
        color: config.output.color,
        quiet: cli.quiet,
    };
    output.apply_color();

    for issue in config.validate() {
        warn!("{}", issue.message);
        eprintln!("{}", ConsoleFormatter::config_issue(&issue));
    }

    if let Command::Config = cli.command {
        show_config(&cli, &config, &output)?;
        return Ok(());
    }

    // === Dependency Injection ===
    let data_dir = cli.data_dir.clone();
    let store: Arc<dyn RecordStore> = match data_dir.as_deref() {
        Some(MEMORY_STORE) => Arc::new(InMemoryRecordStore::new()),
        Some(dir) => Arc::new(JsonFileRecordStore::new(dir)),
        None => Arc::new(JsonFileRecordStore::new(config.storage.resolve_data_dir())),
    };

    let history_dir = resolved_data_dir(data_dir.as_deref(), &config);
    let logger: Arc<dyn DecisionLogger> = match config.history.resolve_file(&history_dir) {
        Some(path) => match JsonlDecisionLogger::open(&path) {
            Some(logger) => {
                info!("Recording decisions to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoDecisionLogger),
        },
        None => Arc::new(NoDecisionLogger),
    };

    let app = App {
        store,
        logger,
        params: config.selection.to_selection_params(),
        output,
    };

    match cli.command {
        Command::People { action } => run_people(&app, action).await,
        Command::Restaurants { action } => run_restaurants(&app, action).await,
        Command::Choose(args) => run_choose(&app, args).await,
        Command::Quick => run_quick(&app).await,
        Command::Config => Ok(()),
    }
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr unless `[log] file` is set, in which case a
/// non-blocking file writer is used and its guard returned.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Log file path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn resolved_data_dir(flag: Option<&str>, config: &FileConfig) -> PathBuf {
    match flag {
        Some(dir) if dir != MEMORY_STORE => PathBuf::from(dir),
        _ => config.storage.resolve_data_dir(),
    }
}

fn print_result<T: serde::Serialize + ?Sized>(output: &OutputConfig, value: &T, text: String) {
    if output.is_json() {
        println!("{}", ConsoleFormatter::json(value));
    } else {
        print!("{}", text);
    }
}

async fn run_people(app: &App, action: PeopleCommand) -> Result<()> {
    let records = ManageRecordsUseCase::new(app.store.clone());

    match action {
        PeopleCommand::List => {
            let people = records.list_people().await?;
            print_result(&app.output, &people, ConsoleFormatter::people(&people));
        }
        PeopleCommand::Add { name } => {
            let person = records.add_person(NewPerson::new(name)).await?;
            print_result(&app.output, &person, ConsoleFormatter::person_added(&person));
        }
        PeopleCommand::Remove { id } => {
            let person = records.remove_person(&RecordId::new(id)).await?;
            print_result(&app.output, &person, ConsoleFormatter::removed(&person.name));
        }
    }
    Ok(())
}

async fn run_restaurants(app: &App, action: RestaurantsCommand) -> Result<()> {
    let records = ManageRecordsUseCase::new(app.store.clone());

    match action {
        RestaurantsCommand::List(filters) => list_restaurants(app, &records, &filters).await?,
        RestaurantsCommand::Add(args) => {
            let restaurant = records.add_restaurant(args.into()).await?;
            print_result(
                &app.output,
                &restaurant,
                ConsoleFormatter::restaurant_added(&restaurant),
            );
        }
        RestaurantsCommand::Remove { id } => {
            let restaurant = records.remove_restaurant(&RecordId::new(id)).await?;
            print_result(
                &app.output,
                &restaurant,
                ConsoleFormatter::removed(&restaurant.to_string()),
            );
        }
    }
    Ok(())
}

async fn list_restaurants(
    app: &App,
    records: &ManageRecordsUseCase<dyn RecordStore>,
    filters: &FilterArgs,
) -> Result<()> {
    let all = records.list_restaurants().await?;
    let criteria = filters.to_criteria();
    let shown = criteria.apply(&all);
    print_result(
        &app.output,
        &shown,
        ConsoleFormatter::restaurants(&shown, all.len(), criteria.is_active()),
    );
    Ok(())
}

async fn run_choose(app: &App, args: ChooseArgs) -> Result<()> {
    let records = ManageRecordsUseCase::new(app.store.clone());
    let participants = records.select_participants(&args.who).await?;

    let input =
        ChooseRestaurantInput::new(participants).with_criteria(args.filters.to_criteria());

    let votes: Box<dyn VotePort> = match args.auto {
        Some(AutoVote::Accept) => Box::new(AutoAcceptVotes),
        Some(AutoVote::Reject) => Box::new(AutoRejectVotes),
        None => Box::new(InteractiveVotePrompt::new()),
    };
    let notifier = ConsoleSelectionNotifier::new(app.output.quiet);

    let use_case = ChooseRestaurantUseCase::new(app.store.clone())
        .with_params(app.params.clone())
        .with_logger(app.logger.clone());
    let result = use_case
        .execute_with_notifier(input, votes.as_ref(), &notifier)
        .await?;

    print_result(&app.output, &result, ConsoleFormatter::decision(&result));
    Ok(())
}

async fn run_quick(app: &App) -> Result<()> {
    let use_case = QuickDecisionUseCase::new(app.store.clone())
        .with_params(app.params.clone())
        .with_logger(app.logger.clone());
    let drawn = use_case.execute().await?;

    print_result(&app.output, &drawn, ConsoleFormatter::quick_decision(&drawn));
    Ok(())
}

fn show_config(cli: &Cli, config: &FileConfig, output: &OutputConfig) -> Result<()> {
    if output.is_json() {
        println!("{}", ConsoleFormatter::json(config));
        return Ok(());
    }

    println!("Configuration sources (in priority order):");
    if cli.no_config {
        println!("  [     ] Files skipped (--no-config)");
    } else {
        for source in ConfigLoader::config_sources(cli.config.as_deref()) {
            let mark = if source.found { "FOUND" } else { "     " };
            println!("  [{}] {:<8} {}", mark, format!("{}:", source.label), source.location);
        }
    }

    println!();
    println!(
        "Data directory: {}",
        resolved_data_dir(cli.data_dir.as_deref(), config).display()
    );
    println!();
    println!("Effective configuration:");
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
