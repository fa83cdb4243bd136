use clap::Parser;
use kvtest::cli::{
    build_controller, handle_completions, handle_config_init, load_config, run, serve, status,
    watch, Cli, Commands, ConfigCommands, ConnectionArgs,
};
use kvtest::config::ConsoleConfig;
use kvtest::logging::init_tracing;
use std::time::Duration;

/// Load config for a one-shot command and start logging.
///
/// One-shot commands log at `warn` unless a level was asked for, so tracing
/// output does not drown the command's own output.
fn prepare(args: &ConnectionArgs) -> Result<ConsoleConfig, Box<dyn std::error::Error>> {
    let mut config = load_config(args)?;
    if args.log_level.is_none() {
        config.logging.level = "warn".to_string();
    }
    config.validate()?;
    init_tracing(&config.logging)?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::Status(args) => match prepare(&args.connection) {
            Ok(config) => match build_controller(&config) {
                Ok(controller) => status::handle_status(&args, &controller)
                    .await
                    .map(|output| println!("{}", output)),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        },
        Commands::Run(args) => match prepare(&args.connection) {
            Ok(config) => match build_controller(&config) {
                Ok(controller) => match run::handle_run(&args, &controller).await {
                    Ok((output, outcome)) => {
                        println!("{}", output);
                        if outcome.is_error() {
                            std::process::exit(1);
                        }
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        },
        Commands::Watch(args) => match prepare(&args.connection) {
            Ok(config) => {
                let interval = Duration::from_secs(
                    args.interval.unwrap_or(config.poller.interval_seconds),
                );
                match build_controller(&config) {
                    Ok(controller) => watch::handle_watch(&args, controller, interval).await,
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => {
                handle_config_init(&args).map(|message| println!("{}", message))
            }
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
