use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use polyglot::banner::{BannerInfo, print_banner};
use polyglot::bridge::Bridge;
use polyglot::client;
use polyglot::config::{ExecutionMode, Settings};
use polyglot::consts::{DEFAULT_SERVER_URL, DEFAULT_UI_INPUT};
use polyglot::invoker::process::ProcessInvoker;
use polyglot::logger;
use polyglot::server::{self, AppState};
use polyglot::terminal;

#[derive(Parser)]
#[command(name = "polyglot", version, about = "One message, three languages.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// TOML config file (default: ~/.polyglot/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the JSON API at / and the page at /ui (default)
    Serve {
        /// Bind address (IP or host name)
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(short, long)]
        port: Option<u16>,

        /// Browser origin allowed to call the API
        #[arg(long)]
        origin: Option<String>,

        /// Run both collaborators at once instead of one after the other
        #[arg(long, default_value_t = false)]
        parallel: bool,

        /// Open the UI page in the default browser once listening
        #[arg(long, default_value_t = false)]
        open: bool,
    },
    /// Relay a message from the terminal; without one, read lines interactively
    Ask {
        input: Option<String>,

        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
    /// Post a message to a running server and print its reply
    Send {
        #[arg(default_value = DEFAULT_UI_INPUT)]
        input: String,

        /// Server endpoint
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
        origin: None,
        parallel: false,
        open: false,
    });

    match command {
        Command::Send { input, url } => {
            let reply = client::send(&url, &input).await?;
            println!("{}", terminal::format_reply(&reply));
            Ok(())
        }
        Command::Ask { input, parallel } => {
            let mut settings = Settings::load(cli.config.as_deref())?;
            if parallel {
                settings.execution = ExecutionMode::Parallel;
            }
            let bridge = Bridge::from_settings(&settings);
            match input {
                Some(input) => {
                    terminal::ask_once(&bridge, &input).await;
                    Ok(())
                }
                None => terminal::repl(&bridge).await,
            }
        }
        Command::Serve {
            host,
            port,
            origin,
            parallel,
            open,
        } => {
            let mut settings = Settings::load(cli.config.as_deref())?;
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            if let Some(origin) = origin {
                settings.server.allowed_origin = origin;
            }
            if parallel {
                settings.execution = ExecutionMode::Parallel;
            }
            settings.validate()?;
            serve(settings, open).await
        }
    }
}

async fn serve(settings: Settings, open: bool) -> anyhow::Result<()> {
    let (host, port) = (&settings.server.host, settings.server.port);
    let addr = server::resolve_addr(host, port).await?;

    let csharp = ProcessInvoker::csharp(&settings.csharp);
    let java = ProcessInvoker::java(&settings.java);
    print_banner(&BannerInfo {
        addr,
        allowed_origin: &settings.server.allowed_origin,
        csharp: &csharp.spec().display(),
        java: &java.spec().display(),
        execution: settings.execution.as_str(),
    });
    let bridge = Bridge::new(Arc::new(csharp), Arc::new(java), settings.execution);

    if open {
        let shown = if addr.ip().is_unspecified() {
            SocketAddr::new(Ipv4Addr::LOCALHOST.into(), addr.port())
        } else {
            addr
        };
        let url = format!("http://{shown}/ui");
        // Headless machines have no browser; the banner already shows the URL.
        if let Err(e) = open::that(&url) {
            tracing::warn!("could not open {url}: {e}");
        }
    }

    let state = AppState::new(bridge, &settings.server.allowed_origin)?;
    server::serve(addr, Arc::new(state)).await
}
