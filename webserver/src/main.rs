//! WebServer entry point
//!
//! Arguments come from the command line, the environment or a `.env` file,
//! in that order of precedence.

use clap::Parser;
use mentorship::{FileRepository, MemoryRepository, Repository};
use shared::{Component, component_info, logging};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use webserver::{WebServer, WebServerError, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Mentor and student pairing service")]
struct Args {
    /// Port for the HTTP API
    #[arg(long, env = "MENTORSHIP_PORT", default_value = "3000")]
    port: u16,

    /// Address to bind to
    #[arg(long, env = "MENTORSHIP_HOST", default_value = "127.0.0.1")]
    host: String,

    /// JSON data file; state is kept in memory only when unset
    #[arg(long, env = "MENTORSHIP_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MENTORSHIP_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn bind_address(host: &str, port: u16) -> WebServerResult<SocketAddr> {
    let ip: IpAddr = host
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid host '{host}': {e}")))?;
    Ok(SocketAddr::new(ip, port))
}

async fn serve<R: Repository + 'static>(address: SocketAddr, repository: R) -> WebServerResult<()> {
    WebServer::new(address, Arc::new(repository)).run().await
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // a missing .env file is fine
    dotenv::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let address = bind_address(&args.host, args.port)?;

    match args.data_file {
        Some(path) => {
            component_info!(Component::WebServer, path = %path.display(), "Using file storage");
            let repository = FileRepository::open(path).await?;
            serve(address, repository).await
        }
        None => {
            component_info!(
                Component::WebServer,
                "Using in-memory storage; data is lost on exit"
            );
            serve(address, MemoryRepository::new()).await
        }
    }
}
