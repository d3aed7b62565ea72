//! Guards and prisoners river-crossing solver.
//!
//! This crate finds a shortest sequence of boat crossings that moves three
//! guards and three prisoners to the new shore without prisoners ever
//! outnumbering guards on either shore. The search is an uninformed
//! breadth-first tree search over a generic [`SearchState`].

pub mod error;
pub mod node;
pub mod report;
pub mod solver;
pub mod state;

// Re-export main types
pub use error::{Error, Result};
pub use node::{Node, NodeArena, NodeId};
pub use report::{format_result, progress_line, write_json, write_text, SearchReport, Timer};
pub use solver::{breadth_first_tree_search, SolverConfig, SolverResult, SolverStatus};
pub use state::{Crossing, Move, SearchState, State, Successors};
