//! Rendering of query results as console text or JSON.

use std::io::Write;

use serde::Serialize;
use social_graph_core::{ConnectionFinder, LogTrace, PersonId, SocialGraph, TraceSink};

/// Outcome of a friend-list query
#[derive(Debug, Serialize)]
pub struct FriendReport {
    pub person: PersonId,
    pub exists: bool,
    pub friends: Vec<PersonId>,
}

impl FriendReport {
    pub fn new(graph: &SocialGraph, person: PersonId) -> Self {
        Self {
            person,
            exists: graph.exists(person),
            friends: graph.neighbors(person),
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if !self.exists {
            return writeln!(out, "Person {} does not exist.", self.person);
        }
        writeln!(out, "Person {} has {} friends!", self.person, self.friends.len())?;
        let list: Vec<String> = self.friends.iter().map(ToString::to_string).collect();
        writeln!(out, "List of friends: {}", list.join(" "))
    }
}

/// Outcome of a connection query
#[derive(Debug, Serialize)]
pub struct ConnectionReport {
    pub first: PersonId,
    pub second: PersonId,
    /// Both persons are present in the graph
    pub exists: bool,
    pub connected: bool,
    /// Friendships walked by the search, source first
    pub path: Option<Vec<PersonId>>,
}

impl ConnectionReport {
    /// Run the connection search, reporting the friendships of a found
    /// path to `trace`.
    pub fn new<T>(graph: &SocialGraph, first: PersonId, second: PersonId, trace: &mut T) -> Self
    where
        T: TraceSink + ?Sized,
    {
        let exists = graph.exists(first) && graph.exists(second);
        let path = if exists {
            ConnectionFinder::new(graph).find_path_traced(first, second, trace)
        } else {
            None
        };
        Self {
            first,
            second,
            exists,
            connected: path.is_some(),
            path,
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if !self.exists {
            writeln!(out, "One or both persons do not exist in the dataset.")
        } else if self.connected {
            writeln!(out, "There is a connection from {} to {}!", self.first, self.second)
        } else {
            writeln!(out, "Cannot find a connection between {} and {}", self.first, self.second)
        }
    }
}

/// Prints traced friendships as "A is friends with B" lines.
///
/// The first write error is kept and returned by [`WriteTrace::finish`].
pub struct WriteTrace<'w, W> {
    out: &'w mut W,
    error: Option<std::io::Error>,
}

impl<'w, W: Write> WriteTrace<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> std::io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> TraceSink for WriteTrace<'_, W> {
    fn friendship(&mut self, from: PersonId, to: PersonId) {
        if self.error.is_none() {
            if let Err(err) = writeln!(self.out, "{from} is friends with {to}") {
                self.error = Some(err);
            }
        }
    }
}

/// Answer a connection query on the console.
///
/// With `trace` set the friendships of the path are printed ahead of the
/// result; otherwise they only reach the debug log.
pub fn write_connection<W: Write>(
    out: &mut W,
    graph: &SocialGraph,
    first: PersonId,
    second: PersonId,
    trace: bool,
) -> std::io::Result<()> {
    let report = if trace {
        let mut sink = WriteTrace::new(&mut *out);
        let report = ConnectionReport::new(graph, first, second, &mut sink);
        sink.finish()?;
        report
    } else {
        ConnectionReport::new(graph, first, second, &mut LogTrace)
    };
    report.write_text(out)
}

/// Write any report as a single line of JSON
pub fn write_json<W: Write, T: Serialize>(out: &mut W, report: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SocialGraph {
        SocialGraph::from_reader("3\n1 2\n2 3\n4 5\n".as_bytes()).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_friend_list_text() {
        let report = FriendReport::new(&sample(), 2);

        assert_eq!(
            render(|out| report.write_text(out)),
            "Person 2 has 2 friends!\nList of friends: 1 3\n"
        );
    }

    #[test]
    fn test_unknown_person_text() {
        let report = FriendReport::new(&sample(), 99);

        assert_eq!(render(|out| report.write_text(out)), "Person 99 does not exist.\n");
    }

    #[test]
    fn test_connection_text() {
        let graph = sample();

        assert_eq!(
            render(|out| write_connection(out, &graph, 1, 3, false)),
            "There is a connection from 1 to 3!\n"
        );
        assert_eq!(
            render(|out| write_connection(out, &graph, 1, 4, false)),
            "Cannot find a connection between 1 and 4\n"
        );
        assert_eq!(
            render(|out| write_connection(out, &graph, 1, 99, false)),
            "One or both persons do not exist in the dataset.\n"
        );
    }

    #[test]
    fn test_connection_trace_text() {
        let graph = sample();

        assert_eq!(
            render(|out| write_connection(out, &graph, 1, 3, true)),
            "2 is friends with 3\n1 is friends with 2\nThere is a connection from 1 to 3!\n"
        );
        assert_eq!(
            render(|out| write_connection(out, &graph, 1, 4, true)),
            "Cannot find a connection between 1 and 4\n"
        );
    }

    #[test]
    fn test_write_trace_keeps_first_error() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut out = Broken;
        let mut sink = WriteTrace::new(&mut out);
        sink.friendship(1, 2);
        sink.friendship(2, 3);

        let err = sink.finish().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_connection_json() {
        let report = ConnectionReport::new(&sample(), 3, 1, &mut LogTrace);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["connected"], true);
        assert_eq!(value["path"], serde_json::json!([3, 2, 1]));
    }

    #[test]
    fn test_write_json_single_line() {
        let report = FriendReport::new(&sample(), 99);
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"person\":99,\"exists\":false,\"friends\":[]}\n"
        );
    }
}
