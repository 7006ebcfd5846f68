//! Command line configuration
//!
//! Every option can also be set through the environment (or a `.env` file):
//!
//! | Flag | Variable | Default |
//! |------|----------|---------|
//! | --api-url | WAITER_API_URL | http://localhost:3000 |
//! | --timeout | WAITER_TIMEOUT_SECS | 30 |
//! | --credential-file | WAITER_CREDENTIAL_FILE | .waiter/credential.json |
//! | --log-level | WAITER_LOG | waiter=info,waiter_client=info |
//! | --log-dir | LOG_DIR | (stderr) |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use waiter_client::ClientConfig;

use crate::item_spec::ItemSpec;

#[derive(Debug, Parser)]
#[command(name = "waiter", version, about = "Restaurant order entry for waiting staff")]
pub struct Cli {
    /// API base URL
    #[arg(long, env = "WAITER_API_URL", default_value = "http://localhost:3000")]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "WAITER_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    /// File the login token is kept in between runs
    #[arg(long, env = "WAITER_CREDENTIAL_FILE", default_value = ".waiter/credential.json")]
    pub credential_file: PathBuf,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, env = "WAITER_LOG")]
    pub log_level: Option<String>,

    /// Write logs to a daily rolling file in this directory
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url)
            .with_timeout(self.timeout)
            .with_credential_file(&self.credential_file)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the entities (branches) available at login
    Entities,
    /// Sign in and keep the token for later commands
    Login(LoginArgs),
    /// Forget the stored token
    Logout,
    /// Show the menu of the signed-in entity
    Menu,
    /// Show the dining tables of the signed-in entity
    Tables,
    /// Compose and submit an order
    Order(OrderArgs),
    /// Show active orders grouped by table
    Status(StatusArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long, short)]
    pub username: String,

    #[arg(long, short, env = "WAITER_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Entity id; defaults to the first entity offered by the server
    #[arg(long, short)]
    pub entity: Option<String>,
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Table id or table number
    #[arg(long, short)]
    pub table: Option<String>,

    /// FOOD[ xQTY][:OPTION[ xQTY],...], by id or name; repeatable
    #[arg(long = "item", short = 'i', value_parser = clap::value_parser!(ItemSpec))]
    pub items: Vec<ItemSpec>,

    /// Free-text note for the kitchen
    #[arg(long, short, default_value = "")]
    pub remark: String,

    /// Print the total without submitting
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Show the lines of this order
    #[arg(long = "expand", short = 'x')]
    pub expand: Option<String>,
}
