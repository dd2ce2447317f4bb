use clap::Parser;
use tower_lsp::{LspService, Server};

mod capabilities;
mod document;
mod error;
mod handlers;
mod logging;
mod server;

#[derive(Parser)]
#[command(name = "varname-lsp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Language server suggesting variable names for object declarations")]
struct Cli {
    /// Use stdio for communication (required)
    #[arg(long)]
    stdio: bool,

    /// Enable debug mode (mirror debug messages to the client log)
    #[arg(long)]
    debug: bool,

    /// Log filter for stderr output, e.g. `debug` (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Disable ANSI colors in log output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if !args.stdio {
        anyhow::bail!("--stdio flag is required");
    }

    logging::init_logger(args.no_color, args.log_level.as_deref())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting varname-lsp");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| server::Backend::new(client, args.debug));

    Server::new(stdin, stdout, socket).serve(service).await;
    Ok(())
}
