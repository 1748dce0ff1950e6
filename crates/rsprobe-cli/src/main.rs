//! # rsprobe
//!
//! Diagnostic probe for local MongoDB replica-set nodes. Each invocation
//! performs exactly one administrative action and exits; the reply is
//! printed as a single JSON line so the tool composes with `jq` and shell
//! pipelines.
//!
//! ## Usage
//!
//! ```bash
//! # Liveness-check the node on a given port
//! rsprobe ping 27018
//!
//! # Initiate the fixed local three-node replica set
//! rsprobe init
//!
//! # Fetch the current replica-set status
//! rsprobe status | jq '.members[].stateStr'
//! ```
//!
//! ## Exit codes
//!
//! - `0` — success, one JSON line on stdout
//! - `2` — operational failure (unreachable node, timeout, bad port, server
//!   error); diagnostic on stderr, nothing on stdout
//! - `3` — missing subcommand or missing argument
//! - `4` — unrecognized subcommand

use std::time::Duration;

use anyhow::{Context, Result};
use argh::FromArgs;
use bson::Document;
use rsprobe_client::{AdminClient, ReplSetConfig};

const EXIT_OK: i32 = 0;
const EXIT_FAILURE: i32 = 2;
const EXIT_USAGE: i32 = 3;
const EXIT_UNKNOWN_COMMAND: i32 = 4;

const USAGE: &str = "usage: ping <port> | init | status";
const COMMANDS: [&str; 3] = ["ping", "init", "status"];

const LOCALHOST: &str = "localhost";
const DEFAULT_PORT: u16 = 27017;
const PING_TIMEOUT: Duration = Duration::from_millis(3000);
const ADMIN_TIMEOUT: Duration = Duration::from_millis(5000);

/// Diagnostic probe for local MongoDB replica-set nodes.
#[derive(FromArgs, Debug)]
struct Cli {
    #[argh(subcommand)]
    command: Option<Commands>,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Ping(PingArgs),
    Init(InitArgs),
    Status(StatusArgs),
}

/// Arguments for the liveness check.
///
/// The port is kept as a string and converted inside the operation, so a
/// non-numeric value is reported as an operational failure (exit 2) rather
/// than a usage error, matching the rest of the failure handling.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "ping")]
/// ping the node listening on localhost:<port>
struct PingArgs {
    /// port of the node to ping
    #[argh(positional)]
    port: String,
}

/// Arguments for replica-set initiation.
///
/// The submitted topology is constant: set id `rs`, members 0/1/2 on
/// localhost ports 27017-27019. Initiation is not idempotent; running it
/// against an already-initiated set surfaces the server's error (exit 2).
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "init")]
/// initiate the fixed local three-node replica set
struct InitArgs {}

/// Arguments for the status query.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "status")]
/// print the current replica-set status
struct StatusArgs {}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so stdout stays a pure JSON line for unix
    // tool usage (piping to jq, etc.). Default level WARN, RUST_LOG overrides.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(run(argv).await);
}

async fn run(mut argv: Vec<String>) -> i32 {
    // The command token matches case-insensitively.
    if let Some(first) = argv.first_mut() {
        *first = first.to_lowercase();
    }
    let args: Vec<&str> = argv.iter().map(String::as_str).collect();

    let cli = match Cli::from_args(&["rsprobe"], &args) {
        Ok(cli) => cli,
        Err(early) => return early_exit_code(&args, early),
    };

    let Some(command) = cli.command else {
        println!("{USAGE}");
        return EXIT_USAGE;
    };

    let outcome = match command {
        Commands::Ping(args) => ping(args).await,
        Commands::Init(_) => init().await,
        Commands::Status(_) => status().await,
    };

    match outcome {
        Ok(()) => EXIT_OK,
        Err(err) => {
            // Full cause chain for operator debugging; stdout gets nothing.
            eprintln!("{err:?}");
            EXIT_FAILURE
        }
    }
}

/// Classifies an argh parse failure into the probe's exit codes.
///
/// argh alone cannot tell a missing argument apart from an unrecognized
/// subcommand, but the set of subcommands is closed: if the first token
/// names one of them the failure is a usage error on that subcommand,
/// otherwise the command itself is unknown.
fn early_exit_code(args: &[&str], early: argh::EarlyExit) -> i32 {
    if early.status.is_ok() {
        // --help output, printed verbatim.
        println!("{}", early.output);
        return EXIT_OK;
    }
    match args.first() {
        Some(first) if COMMANDS.contains(first) => {
            eprintln!("{}", early.output);
            EXIT_USAGE
        }
        Some(_) => {
            println!("unknown command");
            EXIT_UNKNOWN_COMMAND
        }
        None => {
            println!("{USAGE}");
            EXIT_USAGE
        }
    }
}

async fn ping(args: PingArgs) -> Result<()> {
    let port: u16 = args
        .port
        .parse()
        .with_context(|| format!("invalid port number '{}'", args.port))?;
    let client = AdminClient::connect(LOCALHOST, port, PING_TIMEOUT)?;
    let reply = client.ping().await?;
    print_reply(&reply)
}

async fn init() -> Result<()> {
    let client = AdminClient::connect(LOCALHOST, DEFAULT_PORT, ADMIN_TIMEOUT)?;
    let reply = client
        .initiate_replica_set(&ReplSetConfig::local_default())
        .await?;
    print_reply(&reply)
}

async fn status() -> Result<()> {
    let client = AdminClient::connect(LOCALHOST, DEFAULT_PORT, ADMIN_TIMEOUT)?;
    let reply = client.replica_set_status().await?;
    print_reply(&reply)
}

/// Prints the reply as one JSON line, coercing driver-specific values to
/// strings. The same relaxed encoding applies to all three operations.
fn print_reply(reply: &Document) -> Result<()> {
    let value = rsprobe_common::document_to_value(reply);
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}
