#[cfg(target_os = "wasi")]
compile_error!("Compiling for WASI targets is not supported!");

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use chemistry::{command::CommandSender, error::ChemistryError, host::SystemClock, ChemistryPlugin};
use chemistry_config::{logging::LoggingConfig, ChemistryConfig, LoadTomlConfiguration};
use chemistry_core::text::{color::NamedColor, TextComponent};
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(not(unix))]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

const DEFAULT_DATA_FOLDER: &str = "plugins/chemistry";

fn init_logger(logging: &LoggingConfig) {
    if logging.enabled {
        let mut logger = simple_logger::SimpleLogger::new();
        logger = logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        if !logging.timestamp {
            logger = logger.without_timestamps();
        }

        if logging.env {
            logger = logger.env();
        }

        logger = logger.with_level(convert_logger_filter(logging.level));

        logger = logger.with_colors(logging.color);
        logger = logger.with_threads(logging.threads);
        if let Err(err) = logger.init() {
            eprintln!("Couldn't initialize the logger: {err}");
        }
    }
}

const fn convert_logger_filter(level: chemistry_config::logging::LevelFilter) -> LevelFilter {
    match level {
        chemistry_config::logging::LevelFilter::Off => LevelFilter::Off,
        chemistry_config::logging::LevelFilter::Error => LevelFilter::Error,
        chemistry_config::logging::LevelFilter::Warn => LevelFilter::Warn,
        chemistry_config::logging::LevelFilter::Info => LevelFilter::Info,
        chemistry_config::logging::LevelFilter::Debug => LevelFilter::Debug,
        chemistry_config::logging::LevelFilter::Trace => LevelFilter::Trace,
    }
}

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_VERSION: &str = env!("GIT_VERSION");

/// Runs the plugin on its own, reading operator commands from stdin. The data
/// folder is the first argument and defaults to `plugins/chemistry`.
#[tokio::main]
async fn main() {
    let time = Instant::now();
    let data_folder = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_FOLDER), PathBuf::from);

    let data_folder_error = std::fs::create_dir_all(&data_folder).err();
    let (config, config_error) = match ChemistryConfig::load(&data_folder) {
        Ok(config) => (config, None),
        Err(err) => (ChemistryConfig::default(), Some(err)),
    };
    init_logger(&config.logging);

    log::info!("Starting Chemistry {CARGO_PKG_VERSION} ({GIT_VERSION})");
    if let Some(err) = data_folder_error {
        log::warn!("Couldn't create data folder {data_folder:?}. Reason: {err}");
    }
    if let Some(err) = config_error {
        err.log();
        log::warn!("Falling back to the default configuration");
    }

    tokio::spawn(async {
        if let Err(err) = setup_sighandler().await {
            log::error!("Unable to setup signal handlers: {err}");
        }
    });

    let use_console = config.commands.use_console;
    let plugin = Arc::new(ChemistryPlugin::with_config(
        config,
        &data_folder,
        Arc::new(SystemClock),
    ));
    log::info!("Started Chemistry, took {}ms", time.elapsed().as_millis());
    log_data_folder(&data_folder);

    if use_console {
        run_console(plugin).await;
    } else {
        std::future::pending::<()>().await;
    }
}

fn log_data_folder(data_folder: &Path) {
    match data_folder.canonicalize() {
        Ok(path) => log::info!("Using data folder {}", path.display()),
        Err(_) => log::info!("Using data folder {}", data_folder.display()),
    }
}

fn handle_interrupt() {
    log::warn!(
        "{}",
        TextComponent::text("Received interrupt signal; stopping...")
            .color_named(NamedColor::Red)
            .to_pretty_console()
    );
    std::process::exit(0);
}

// Non-UNIX Ctrl-C handling
#[cfg(not(unix))]
async fn setup_sighandler() -> io::Result<()> {
    if ctrl_c().await.is_ok() {
        handle_interrupt();
    }

    Ok(())
}

// Unix signal handling
#[cfg(unix)]
async fn setup_sighandler() -> io::Result<()> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut hangup = signal(SignalKind::hangup())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = interrupt.recv() => {}
        _ = hangup.recv() => {}
        _ = terminate.recv() => {}
    }
    handle_interrupt();

    Ok(())
}

async fn run_console(plugin: Arc<ChemistryPlugin>) {
    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    loop {
        let mut out = String::new();

        match reader.read_line(&mut out).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                log::error!("Failed to read console line: {err}");
                break;
            }
        }

        let line = out.trim();
        if !line.is_empty() {
            plugin.handle_command(&CommandSender::Console, line);
        }
    }
    log::info!("Console closed, stopping");
}
