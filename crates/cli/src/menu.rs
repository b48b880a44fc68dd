//! Interactive console menu
//!
//! The menu reads one answer per line from any `BufRead` and writes prompts
//! and results to any `Write`, so it runs the same against a terminal or an
//! in-memory script.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use social_graph_core::{PersonId, SocialGraph};
use tracing::debug;

use crate::report::{self, FriendReport};

/// Ask for the graph file path on the console
pub fn prompt_file_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<PathBuf> {
    write!(output, "Input file path: ")?;
    output.flush()?;
    match read_answer(input)? {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => bail!("no graph file path given"),
    }
}

/// Load the graph file, with the path in the error on failure
pub fn load_graph(path: &Path) -> anyhow::Result<SocialGraph> {
    SocialGraph::from_path(path)
        .with_context(|| format!("failed to load graph file {}", path.display()))
}

/// Load the graph file and confirm it on the console.
///
/// Nothing is written when the load fails.
pub fn load_announced<W: Write>(path: &Path, output: &mut W) -> anyhow::Result<SocialGraph> {
    let graph = load_graph(path)?;
    writeln!(output, "Graph file loaded!")?;
    Ok(graph)
}

/// What the user picked from the main menu
enum Choice {
    FriendList,
    Connection,
    Exit,
    Invalid,
}

impl Choice {
    fn parse(answer: &str) -> Self {
        match answer.parse::<u32>() {
            Ok(1) => Choice::FriendList,
            Ok(2) => Choice::Connection,
            Ok(3) => Choice::Exit,
            _ => Choice::Invalid,
        }
    }
}

/// The main menu loop over a loaded graph
pub struct Menu<'g, R, W> {
    graph: &'g SocialGraph,
    input: R,
    output: W,
    trace: bool,
}

impl<'g, R: BufRead, W: Write> Menu<'g, R, W> {
    pub fn new(graph: &'g SocialGraph, input: R, output: W) -> Self {
        Self {
            graph,
            input,
            output,
            trace: false,
        }
    }

    /// Print the friendships of each discovered connection
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "MAIN MENU")?;
            writeln!(self.output, "[1] Get Friend List")?;
            writeln!(self.output, "[2] Get Connection")?;
            writeln!(self.output, "[3] Exit\n")?;

            let Some(answer) = self.prompt("Enter your choice: ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            match Choice::parse(&answer) {
                Choice::FriendList => {
                    let Some(person) = self.prompt_person("Enter ID of person: ")? else {
                        continue;
                    };
                    FriendReport::new(self.graph, person).write_text(&mut self.output)?;
                }
                Choice::Connection => {
                    let Some(first) = self.prompt_person("Enter ID of first person: ")? else {
                        continue;
                    };
                    let Some(second) = self.prompt_person("Enter ID of second person: ")? else {
                        continue;
                    };
                    report::write_connection(&mut self.output, self.graph, first, second, self.trace)?;
                }
                Choice::Exit => {
                    writeln!(self.output, "Exiting the program. Goodbye!")?;
                    return Ok(());
                }
                Choice::Invalid => {
                    writeln!(self.output, "Invalid choice. Please enter valid option.")?;
                }
            }
        }
    }

    /// Prompt and read one trimmed line, `None` at end of input
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush().context("failed to flush prompt")?;
        read_answer(&mut self.input)
    }

    /// Prompt for a person ID. Prints an error and yields `None` when the
    /// answer is not an ID or input has ended.
    fn prompt_person(&mut self, text: &str) -> anyhow::Result<Option<PersonId>> {
        let Some(answer) = self.prompt(text)? else {
            return Ok(None);
        };
        match answer.parse::<PersonId>() {
            Ok(person) => Ok(Some(person)),
            Err(_) => {
                writeln!(self.output, "Invalid person ID.")?;
                Ok(None)
            }
        }
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read console input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
