use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use taskdesk::{
    auth::{
        Session,
        handlers::{authenticate, logout, seed_default_admin},
    },
    cli::Cli,
    commands,
    config::Config,
    db::init_store,
    error::AppError,
    models::LoginReqDto,
};

fn main() {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_tracing(&config, cli.verbose);

    if let Err(e) = run(cli, config) {
        let user_error = e
            .downcast_ref::<AppError>()
            .is_some_and(AppError::is_user_error);
        if user_error {
            warn!(error = %format!("{:#}", e), "Command rejected");
        } else {
            error!(error = %format!("{:#}", e), "Command failed");
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &Config, verbose: bool) -> WorkerGuard {
    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    guard
}

fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    info!(?config, "Starting");

    let store = init_store(&config.data_dir)
        .with_context(|| format!("cannot open data directory {}", config.data_dir.display()))?;
    if seed_default_admin(&store, &config)? {
        println!("Created default admin account 'admin'; change its password.");
    }

    let username = cli
        .username
        .ok_or_else(|| anyhow!("--username is required (or set TASKDESK_USERNAME)"))?;
    let password = cli
        .password
        .ok_or_else(|| anyhow!("--password is required (or set TASKDESK_PASSWORD)"))?;

    let mut session = Session::anonymous();
    authenticate(&store, &mut session, &LoginReqDto { username, password })?;

    let result = commands::execute(cli.command, &store, &session);
    logout(&mut session);
    Ok(result?)
}
