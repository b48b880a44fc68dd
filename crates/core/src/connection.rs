//! Reachability search between two persons
//!
//! The search is a depth-first traversal driven by an explicit frame stack
//! rather than recursion, so long friendship chains cannot exhaust the call
//! stack. A person is marked visited as soon as the search enters them and
//! is never entered twice, which bounds the work at O(V + E) per query.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{PersonId, SocialGraph};

/// Receives the friendships along a discovered connection.
///
/// Edges are reported deepest first: the friendship reaching the target
/// comes first, the one leaving the source comes last.
pub trait TraceSink {
    fn friendship(&mut self, from: PersonId, to: PersonId);
}

impl<F> TraceSink for F
where
    F: FnMut(PersonId, PersonId),
{
    fn friendship(&mut self, from: PersonId, to: PersonId) {
        self(from, to)
    }
}

/// Sends each traced friendship to the `tracing` debug log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn friendship(&mut self, from: PersonId, to: PersonId) {
        debug!(from, to, "{from} is friends with {to}");
    }
}

/// Answers connection queries against a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionFinder<'g> {
    graph: &'g SocialGraph,
}

/// A person being explored, with the friends not yet tried.
struct Frame<I> {
    person: PersonId,
    friends: I,
}

impl<'g> ConnectionFinder<'g> {
    pub fn new(graph: &'g SocialGraph) -> Self {
        Self { graph }
    }

    /// Whether any chain of friendships links `source` to `target`.
    ///
    /// A person is always connected to themselves. Unknown persons are
    /// connected to no one.
    pub fn is_connected(&self, source: PersonId, target: PersonId) -> bool {
        self.find_path(source, target).is_some()
    }

    /// Like [`ConnectionFinder::is_connected`], reporting the friendships of
    /// the discovered path to `trace`.
    pub fn is_connected_traced<T>(&self, source: PersonId, target: PersonId, trace: &mut T) -> bool
    where
        T: TraceSink + ?Sized,
    {
        self.find_path_traced(source, target, trace).is_some()
    }

    /// Like [`ConnectionFinder::find_path`], reporting each friendship of the
    /// path to `trace`, deepest first.
    pub fn find_path_traced<T>(
        &self,
        source: PersonId,
        target: PersonId,
        trace: &mut T,
    ) -> Option<Vec<PersonId>>
    where
        T: TraceSink + ?Sized,
    {
        let path = self.find_path(source, target)?;
        for step in path.windows(2).rev() {
            trace.friendship(step[0], step[1]);
        }
        Some(path)
    }

    /// The chain of persons the search walked from `source` to `target`.
    ///
    /// The path starts at `source` and ends at `target`. It is the first
    /// path the depth-first search finds, not necessarily the shortest.
    pub fn find_path(&self, source: PersonId, target: PersonId) -> Option<Vec<PersonId>> {
        if !self.graph.exists(source) || !self.graph.exists(target) {
            return None;
        }
        if source == target {
            return Some(vec![source]);
        }

        let mut visited: HashSet<PersonId> = HashSet::new();
        visited.insert(source);
        let mut stack = vec![Frame {
            person: source,
            friends: self.graph.adjacent(source),
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(friend) = frame.friends.next() else {
                stack.pop();
                continue;
            };
            if !visited.insert(friend) {
                continue;
            }
            if friend == target {
                let mut path: Vec<PersonId> = stack.iter().map(|f| f.person).collect();
                path.push(friend);
                debug!(source, target, explored = visited.len(), "connection found");
                return Some(path);
            }
            stack.push(Frame {
                person: friend,
                friends: self.graph.adjacent(friend),
            });
        }

        debug!(source, target, explored = visited.len(), "no connection");
        None
    }
}

/// Whether `source` and `target` are linked by a chain of friendships
pub fn is_connected(graph: &SocialGraph, source: PersonId, target: PersonId) -> bool {
    ConnectionFinder::new(graph).is_connected(source, target)
}
