use std::path::PathBuf;

use clap::Parser;

/// Simulator configuration parsed from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "wssim",
    version,
    about = "Generic webservice simulator answering API calls with canned responses"
)]
pub struct SimulatorConfig {
    /// TCP port for the HTTP server.
    #[arg(short = 'p', long, default_value_t = 8099)]
    pub port: u16,

    /// Directory holding `{METHOD}/{function}.json` fixtures and the
    /// `statuscode.txt` override file.
    #[arg(long, default_value = "responses")]
    pub responses_dir: PathBuf,

    /// Directory served for every path outside `/api`.
    #[arg(long, default_value = "web")]
    pub web_dir: PathBuf,
}
