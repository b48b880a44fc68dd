//! Friendship graph storage
//!
//! Uses `petgraph::graphmap::UnGraphMap` keyed directly by person ID, so a
//! person exists exactly when they appear in at least one friendship and
//! every friendship is visible from both ends.

use std::io::Read;
use std::path::Path;

use petgraph::graphmap::UnGraphMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LoadError;
use crate::parser::{self, Friendship};

/// Identifier of a person in the network.
pub type PersonId = u64;

/// A person's direct friends, sorted ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendList {
    pub person: PersonId,
    pub friends: Vec<PersonId>,
}

impl FriendList {
    /// Number of direct friends
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

/// The social network as an undirected graph of person IDs.
///
/// A graph is built in one piece from an edge list and never mutated
/// afterwards, except by replacing it wholesale with [`SocialGraph::load`].
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// Adjacency storage (private so friendships are only added in pairs)
    inner: UnGraphMap<PersonId, ()>,
}

impl SocialGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from friendship pairs.
    ///
    /// Repeated pairs collapse into one friendship.
    pub fn from_friendships<I>(friendships: I) -> Self
    where
        I: IntoIterator<Item = Friendship>,
    {
        let mut inner = UnGraphMap::new();
        for (a, b) in friendships {
            inner.add_edge(a, b, ());
        }
        Self { inner }
    }

    /// Read an edge list and build a graph from it.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the source cannot be read (including non UTF-8
    /// content), [`LoadError::Malformed`] if it is not a valid edge list.
    pub fn from_reader<R: Read>(mut source: R) -> Result<Self, LoadError> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;
        let pairs = parser::parse_edge_list(&text)?;
        let graph = Self::from_friendships(pairs);
        debug!(
            persons = graph.person_count(),
            friendships = graph.friendship_count(),
            "graph loaded"
        );
        Ok(graph)
    }

    /// Open a file and build a graph from its edge list
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Replace this graph with one read from `source`.
    ///
    /// The new graph is fully built before it replaces the current one; on
    /// error the current graph is left untouched.
    pub fn load<R: Read>(&mut self, source: R) -> Result<(), LoadError> {
        *self = Self::from_reader(source)?;
        Ok(())
    }

    /// Replace this graph with the one stored at `path`
    pub fn load_path(&mut self, path: &Path) -> Result<(), LoadError> {
        *self = Self::from_path(path)?;
        Ok(())
    }

    /// Whether the person appears in at least one friendship
    pub fn exists(&self, id: PersonId) -> bool {
        self.inner.contains_node(id)
    }

    /// Direct friends of `id` in ascending order.
    ///
    /// Unknown persons have no friends; use [`SocialGraph::exists`] to tell
    /// an unknown person apart from a known one.
    pub fn neighbors(&self, id: PersonId) -> Vec<PersonId> {
        let mut friends: Vec<PersonId> = self.inner.neighbors(id).collect();
        friends.sort_unstable();
        friends
    }

    /// Friend list of a known person, `None` if the person does not exist
    pub fn friend_list(&self, id: PersonId) -> Option<FriendList> {
        self.exists(id).then(|| FriendList {
            person: id,
            friends: self.neighbors(id),
        })
    }

    /// Number of direct friends (0 for unknown persons)
    pub fn friend_count(&self, id: PersonId) -> usize {
        self.inner.neighbors(id).count()
    }

    /// All persons in ascending order
    pub fn persons(&self) -> Vec<PersonId> {
        let mut persons: Vec<PersonId> = self.inner.nodes().collect();
        persons.sort_unstable();
        persons
    }

    pub fn person_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of distinct friendships
    pub fn friendship_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Friends of `id` in storage order, without sorting.
    pub(crate) fn adjacent(&self, id: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.inner.neighbors(id)
    }

    /// Underlying petgraph structure, for algorithms that take it directly
    pub fn as_graphmap(&self) -> &UnGraphMap<PersonId, ()> {
        &self.inner
    }
}
