//! OmniHub - a TUI control deck for a simulated IR/FM smart home hub
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates; the default invocation runs the TUI and the `hook`
//! subcommand serves the webhook verification endpoint instead.

use clap::{Parser, Subcommand};

use omnihub_app::config;
use omnihub_hook::HookConfig;

/// OmniHub - control deck for the OmniControl smart hub
#[derive(Parser, Debug)]
#[command(name = "omnihub")]
#[command(about = "A TUI control deck for a simulated IR/FM smart home hub", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the webhook verification endpoint
    Hook {
        /// Address to listen on (default from config, 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (default from config, 8787)
        #[arg(long)]
        port: Option<u16>,

        /// Verification token the handshake must present
        #[arg(long)]
        verify_token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    omnihub_core::logging::init()?;

    let args = Args::parse();
    let settings = config::load_settings();

    match args.command {
        Some(Command::Hook {
            bind,
            port,
            verify_token,
        }) => {
            let config = HookConfig {
                bind: bind.unwrap_or(settings.hook.bind),
                port: port.unwrap_or(settings.hook.port),
                verify_token: verify_token.unwrap_or(settings.hook.verify_token),
            };
            omnihub_hook::serve(config).await?;
        }
        None => {
            omnihub_tui::run(settings).await?;
        }
    }

    Ok(())
}
