//! Social Graph Core Library
//!
//! This library loads a friendship network from an edge-list file and
//! answers friend-list and connection queries against it.

pub mod connection;
pub mod error;
pub mod graph;
pub mod parser;

// Re-export commonly used types
pub use connection::{is_connected, ConnectionFinder, LogTrace, TraceSink};
pub use error::{LoadError, MalformedData};
pub use graph::{FriendList, PersonId, SocialGraph};
