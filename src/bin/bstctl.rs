// Command line front end for a persisted tree

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use bstree::{Key, Order, Request, Response, Session, SessionConfig, TreeKind};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bstctl")]
#[command(about = "Edit and inspect a binary search tree saved as JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tree state file
    #[arg(short, long, global = true, default_value = "tree.json")]
    state: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the tree with an empty one
    Init {
        /// Tree type (plain/bst or balanced/avl)
        #[arg(default_value = "plain")]
        kind: TreeKind,
    },

    /// Insert a key
    Insert {
        /// Integer, float, or text key
        key: Key,
    },

    /// Delete a key
    Delete {
        /// Integer, float, or text key
        key: Key,
    },

    /// Search for a key and print the path taken
    Search {
        /// Integer, float, or text key
        key: Key,
    },

    /// Print the keys in the given order
    Traverse {
        /// inorder, preorder, postorder or levelorder
        #[arg(default_value = "inorder")]
        order: Order,
    },

    /// Print the saved tree document
    Show,

    /// Answer JSON requests read line by line from stdin
    Serve,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut session = Session::open(SessionConfig {
        kind: TreeKind::default(),
        state_path: Some(cli.state.clone()),
    })
    .with_context(|| format!("opening {}", cli.state.display()))?;

    let request = match cli.command {
        Commands::Init { kind } => Request::Initialize {
            kind: Some(kind.to_string()),
        },
        Commands::Insert { key } => Request::Insert { key: Some(key) },
        Commands::Delete { key } => Request::Delete { key: Some(key) },
        Commands::Search { key } => Request::Search { key: Some(key) },
        Commands::Traverse { order } => Request::Traverse {
            order: Some(order.to_string()),
        },
        Commands::Show => Request::Tree,
        Commands::Serve => return serve(&mut session),
    };

    let response = session.handle(request);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// One JSON request per input line, one JSON response per output line.
fn serve(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                debug!(?request, "handling request");
                session.handle(request)
            }
            Err(err) => Response::failure(&bstree::Error::from(err)),
        };
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    Ok(())
}
