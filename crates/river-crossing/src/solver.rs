//! Breadth-first tree search.
//!
//! The frontier is a FIFO queue of node ids, so the first goal dequeued is
//! reached by a shortest action sequence. Visited states are not tracked:
//! a state reachable along several paths is expanded once per path.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::node::NodeArena;
use crate::state::SearchState;

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Stop after this many expansions (`None` searches until the frontier is empty)
    pub max_expansions: Option<usize>,
}

/// How the search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStatus {
    /// A goal node was dequeued
    Solved,
    /// The frontier ran empty
    Exhausted,
    /// `max_expansions` was reached before a goal was found
    BudgetExhausted,
}

/// Result of the solver search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult<A> {
    pub status: SolverStatus,
    /// Number of nodes expanded
    pub expansions: usize,
    /// Deepest depth dequeued
    pub max_depth: u32,
    /// Number of nodes created, root included
    pub nodes_generated: usize,
    /// Actions from the initial state to the goal, if one was found
    pub solution: Option<Vec<A>>,
}

impl<A> SolverResult<A> {
    pub fn is_solved(&self) -> bool {
        self.status == SolverStatus::Solved
    }
}

/// Run a breadth-first tree search from `initial`.
///
/// `on_new_depth` is called the first time a node of each depth is dequeued.
/// It is only for progress reporting and cannot influence the search.
pub fn breadth_first_tree_search<S, F>(
    initial: S,
    config: &SolverConfig,
    mut on_new_depth: F,
) -> SolverResult<S::Action>
where
    S: SearchState,
    F: FnMut(u32),
{
    let mut arena = NodeArena::new();
    let root = arena.insert_root(initial);

    let mut frontier: VecDeque<_> = VecDeque::new();
    frontier.push_back(root);

    let mut expansions: usize = 0;
    let mut max_depth: Option<u32> = None;

    while let Some(id) = frontier.pop_front() {
        let (depth, is_goal) = {
            let node = arena.get(id);
            (node.depth, node.state.is_goal())
        };

        if max_depth.map_or(true, |deepest| depth > deepest) {
            max_depth = Some(depth);
            debug!(depth, expansions, frontier = frontier.len(), "reached new depth");
            on_new_depth(depth);
        }

        if is_goal {
            let solution = arena.extract_path(id);
            info!(expansions, steps = solution.len(), "goal found");
            return SolverResult {
                status: SolverStatus::Solved,
                expansions,
                max_depth: depth,
                nodes_generated: arena.len(),
                solution: Some(solution),
            };
        }

        if config
            .max_expansions
            .is_some_and(|limit| expansions >= limit)
        {
            info!(expansions, "expansion budget exhausted");
            return SolverResult {
                status: SolverStatus::BudgetExhausted,
                expansions,
                max_depth: depth,
                nodes_generated: arena.len(),
                solution: None,
            };
        }

        expansions += 1;
        let children = arena.expand(id);
        trace!(node = id.index(), depth, children = children.len(), "expanded");
        frontier.extend(children);
    }

    info!(expansions, "frontier exhausted without reaching a goal");
    SolverResult {
        status: SolverStatus::Exhausted,
        expansions,
        max_depth: max_depth.unwrap_or(0),
        nodes_generated: arena.len(),
        solution: None,
    }
}
