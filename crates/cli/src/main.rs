use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use social_graph_core::{LogTrace, PersonId};
use tracing_subscriber::EnvFilter;

mod menu;
mod report;

use report::{ConnectionReport, FriendReport};

/// Social Graph - friend lists and connections in a friendship network
#[derive(Parser)]
#[command(name = "socialgraph")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Query friend lists and connections in a social network", long_about = None)]
struct Cli {
    /// Graph file (asked for on the console when omitted)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the friendships along each connection found
    #[arg(long, global = true)]
    trace: bool,

    /// Print one-shot query results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Run a single query instead of the interactive menu
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the direct friends of a person
    Friends {
        /// ID of the person
        person: PersonId,
    },
    /// Check whether two persons are connected by friendships
    Connect {
        /// ID of the first person
        first: PersonId,
        /// ID of the second person
        second: PersonId,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let path = match cli.file {
        Some(path) => path,
        None => menu::prompt_file_path(&mut input, &mut output)?,
    };
    match cli.command {
        Some(Command::Friends { person }) => {
            let graph = menu::load_graph(&path)?;
            let report = FriendReport::new(&graph, person);
            if cli.json {
                report::write_json(&mut output, &report)?;
            } else {
                report.write_text(&mut output)?;
            }
        }
        Some(Command::Connect { first, second }) => {
            let graph = menu::load_graph(&path)?;
            if cli.json {
                let report = ConnectionReport::new(&graph, first, second, &mut LogTrace);
                report::write_json(&mut output, &report)?;
            } else {
                report::write_connection(&mut output, &graph, first, second, cli.trace)?;
            }
        }
        None => {
            let graph = menu::load_announced(&path, &mut output)?;
            menu::Menu::new(&graph, input, output)
                .with_trace(cli.trace)
                .run()?;
        }
    }

    Ok(())
}
