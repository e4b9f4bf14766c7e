//! Boards and the shared nail supply that tools operate on.

// used to read board inventories from configuration
use serde::Deserialize;
// used to flag a supply that has been overdrawn
use tracing::warn;

// used to print out readable forms of a board
use std::fmt;

// ------------- Board -------------
/// A surface we can work on: how many nails it should hold and how many it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Board {
    #[serde(default)]
    nails_needed: i64,
    #[serde(default)]
    nails_driven: i64,
}

impl Board {
    pub fn new(nails_needed: i64, nails_driven: i64) -> Self {
        Self {
            nails_needed,
            nails_driven,
        }
    }
    /// An old board that should end up with no nails in it.
    pub fn rotted(nails_driven: i64) -> Self {
        Self::new(0, nails_driven)
    }
    /// A new board with nothing driven yet.
    pub fn fresh(nails_needed: i64) -> Self {
        Self::new(nails_needed, 0)
    }
    pub fn nails_needed(&self) -> i64 {
        self.nails_needed
    }
    pub fn nails_driven(&self) -> i64 {
        self.nails_driven
    }
    pub fn is_secured(&self) -> bool {
        self.nails_driven == self.nails_needed
    }
    pub fn nail_in(&mut self) {
        self.nails_driven += 1;
    }
    pub fn nail_out(&mut self) {
        self.nails_driven -= 1;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{needed: {}, driven: {}}}",
            self.nails_needed, self.nails_driven
        )
    }
}

// ------------- Nail Supply -------------
/// Loose nails available to the crew.
///
/// Nothing stops the count from going below zero: a driver will happily take
/// a nail that isn't there. That is only reported, never prevented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NailSupply(i64);

impl NailSupply {
    pub fn new(nails: i64) -> Self {
        Self(nails)
    }
    pub fn count(&self) -> i64 {
        self.0
    }
    pub fn take(&mut self) {
        self.0 -= 1;
        if self.0 < 0 {
            warn!(supply = self.0, "nail supply is overdrawn");
        }
    }
    pub fn put_back(&mut self) {
        self.0 += 1;
    }
}
