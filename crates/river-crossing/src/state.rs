//! River-crossing state representation.
//!
//! A state records how many guards and prisoners are still on the original
//! shore and which shore the boat is moored at. Everything on the new shore
//! is derived from the group size.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of guards, and of prisoners, in the puzzle
pub const GROUP_SIZE: i32 = 3;

/// Maximum occupants of the boat per crossing
pub const BOAT_CAPACITY: i32 = 2;

/// `boat` value when the boat is at the new shore
pub const NEW_SHORE: i32 = 0;

/// `boat` value when the boat is at the original shore
pub const ORIGINAL_SHORE: i32 = 1;

/// Successors produced by a single expansion, in enumeration order.
///
/// A river-crossing state has at most five legal crossings, so the inline
/// capacity is never exceeded for it.
pub type Successors<S> = SmallVec<[(<S as SearchState>::Action, S); 8]>;

/// A state that the tree search can expand.
pub trait SearchState: Sized + Clone + fmt::Debug {
    /// Transition taken from a parent to reach a successor
    type Action: Clone + fmt::Debug;

    /// Whether this state satisfies the goal
    fn is_goal(&self) -> bool;

    /// Enumerate every legal `(action, next_state)` pair.
    ///
    /// The order is part of the contract: it decides which of several
    /// equally short solutions the breadth-first search returns.
    fn successors(&self) -> Successors<Self>;
}

/// Direction of a crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossing {
    /// From the original shore to the new shore
    Outbound,
    /// Back from the new shore to the original shore
    Return,
}

impl Crossing {
    /// Direction the boat travels next when moored at `boat`
    pub fn from_boat(boat: i32) -> Self {
        if boat == ORIGINAL_SHORE {
            Crossing::Outbound
        } else {
            Crossing::Return
        }
    }

    /// Change applied to the original-shore tally per occupant moved
    pub fn sign(self) -> i32 {
        match self {
            Crossing::Outbound => -1,
            Crossing::Return => 1,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Crossing::Outbound => "from the original shore to the new shore",
            Crossing::Return => "back from the new shore to the original shore",
        }
    }
}

/// One configuration of the puzzle, counted from the original shore.
///
/// Fields are plain integers so that candidate states produced by an
/// overshooting crossing can still be represented and rejected by
/// [`State::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub guards: i32,
    pub prisoners: i32,
    pub boat: i32,
}

impl State {
    pub fn new(guards: i32, prisoners: i32, boat: i32) -> Self {
        Self {
            guards,
            prisoners,
            boat,
        }
    }

    /// Everyone on the original shore together with the boat
    pub fn initial() -> Self {
        Self::new(GROUP_SIZE, GROUP_SIZE, ORIGINAL_SHORE)
    }

    /// Check the range and outnumbering rules on both shores.
    pub fn is_valid(&self) -> bool {
        if !(0..=GROUP_SIZE).contains(&self.guards)
            || !(0..=GROUP_SIZE).contains(&self.prisoners)
            || (self.boat != NEW_SHORE && self.boat != ORIGINAL_SHORE)
        {
            return false;
        }

        // Original shore
        if self.prisoners > self.guards && self.guards > 0 {
            return false;
        }

        // New shore holds GROUP_SIZE - guards guards and GROUP_SIZE - prisoners prisoners
        if self.prisoners < self.guards && self.guards < GROUP_SIZE {
            return false;
        }

        true
    }

    /// The same configuration described from the new shore.
    pub fn complement(&self) -> Self {
        Self::new(
            GROUP_SIZE - self.guards,
            GROUP_SIZE - self.prisoners,
            NEW_SHORE + ORIGINAL_SHORE - self.boat,
        )
    }

    /// Direction of the next crossing from this state
    pub fn next_crossing(&self) -> Crossing {
        Crossing::from_boat(self.boat)
    }

    /// Candidate state after ferrying the given occupants across.
    ///
    /// The result is not checked; callers test it with [`State::is_valid`].
    pub fn cross(&self, guards: i32, prisoners: i32) -> Self {
        let sign = self.next_crossing().sign();
        Self::new(
            self.guards + sign * guards,
            self.prisoners + sign * prisoners,
            self.boat + sign,
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "< State ({}, {}, {}) >",
            self.guards, self.prisoners, self.boat
        )
    }
}

/// A legal crossing together with the state it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub guards: i32,
    pub prisoners: i32,
    pub crossing: Crossing,
    pub result: State,
}

impl Move {
    /// Number of people in the boat
    pub fn load(&self) -> i32 {
        self.guards + self.prisoners
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "take {} guards and {} prisoners {}. {}",
            self.guards,
            self.prisoners,
            self.crossing.description(),
            self.result
        )
    }
}

impl SearchState for State {
    type Action = Move;

    fn is_goal(&self) -> bool {
        self.guards == 0 && self.prisoners == 0 && self.boat == NEW_SHORE
    }

    fn successors(&self) -> Successors<Self> {
        let crossing = self.next_crossing();
        let mut successors: Successors<Self> = SmallVec::new();

        for guards in 0..=BOAT_CAPACITY {
            for prisoners in 0..=BOAT_CAPACITY {
                let load = guards + prisoners;
                if !(1..=BOAT_CAPACITY).contains(&load) {
                    continue;
                }

                let next = self.cross(guards, prisoners);
                if !next.is_valid() {
                    continue;
                }

                let action = Move {
                    guards,
                    prisoners,
                    crossing,
                    result: next,
                };
                successors.push((action, next));
            }
        }

        successors
    }
}
