mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use veil_common::{VeilError, Viewer};
use veil_platform::{SystemClipboard, TerminalDialogs, TerminalNotifier};

use commands::{Ports, Session};

const DEFAULT_LOG_DIRECTIVE: &str = "veil=info";

fn init_logging(log_level: Option<&str>) {
    let directive = log_level.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    };
    // stdout carries stylesheets and share codes
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: cli::Args) -> Result<(), VeilError> {
    let world = match args.world {
        Some(path) => path,
        None => veil_config::default_store_path()?,
    };
    let viewer = if args.owner {
        Viewer::owner(args.user)
    } else {
        Viewer::player(args.user)
    };

    let mut session = Session::open(&world, viewer, Box::new(TerminalNotifier::stderr()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut dialogs = TerminalDialogs::stdio(args.yes);
    let mut clipboard = SystemClipboard::new();
    let mut ports = Ports {
        out: &mut out,
        dialogs: &mut dialogs,
        clipboard: &mut clipboard,
    };

    commands::run(&mut session, args.command, &mut ports)
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::info!("Hotbar Veil v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("veil: {e}");
            ExitCode::FAILURE
        }
    }
}
