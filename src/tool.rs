//! Tool behaviors and the toolbox that groups them.
//!
//! Two small contracts, [`NailDriver`] and [`NailPuller`], are composed into
//! [`NailDrivePuller`]. Anything implementing both halves gets the composed
//! contract for free, which is how a [`Toolbox`] holding any driver and any
//! puller can be handed to code that asks for "something that can drive and
//! pull".
//!
//! Tools never print. Each operation moves one nail and hands back the notice
//! line describing what happened; the caller decides where it goes.

// used to let configuration pick the concrete tools
use serde::Deserialize;
use tracing::debug;

use crate::board::{Board, NailSupply};

// ------------- Contracts -------------
/// Behavior to drive nails into a board.
pub trait NailDriver {
    /// Takes one nail out of the supply and drives it into the board.
    fn drive_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str;
}

/// Behavior to remove nails from a board.
pub trait NailPuller {
    /// Yanks one nail out of the board and puts it back into the supply.
    fn pull_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str;
}

/// The composed behavior of driving and pulling.
pub trait NailDrivePuller: NailDriver + NailPuller {}

impl<T: NailDriver + NailPuller + ?Sized> NailDrivePuller for T {}

impl<T: NailDriver + ?Sized> NailDriver for Box<T> {
    fn drive_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str {
        (**self).drive_nail(supply, board)
    }
}

impl<T: NailPuller + ?Sized> NailPuller for Box<T> {
    fn pull_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str {
        (**self).pull_nail(supply, board)
    }
}

// ------------- Tools -------------
/// Pounds in nails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mallet;

impl NailDriver for Mallet {
    fn drive_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str {
        supply.take();
        board.nail_in();
        debug!(
            supply = supply.count(),
            driven = board.nails_driven(),
            "mallet drove a nail"
        );
        "Mallet: pounded nail into the board."
    }
}

/// Removes nails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crowbar;

impl NailPuller for Crowbar {
    fn pull_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str {
        board.nail_out();
        supply.put_back();
        debug!(
            supply = supply.count(),
            driven = board.nails_driven(),
            "crowbar pulled a nail"
        );
        "Crowbar: yanked nail out of the board."
    }
}

/// One head for driving, one for pulling: a single value satisfying both contracts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClawHammer;

impl NailDriver for ClawHammer {
    fn drive_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str {
        supply.take();
        board.nail_in();
        debug!(
            supply = supply.count(),
            driven = board.nails_driven(),
            "claw hammer drove a nail"
        );
        "ClawHammer: drove nail into the board."
    }
}

impl NailPuller for ClawHammer {
    fn pull_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str {
        board.nail_out();
        supply.put_back();
        debug!(
            supply = supply.count(),
            driven = board.nails_driven(),
            "claw hammer pulled a nail"
        );
        "ClawHammer: pried nail out of the board."
    }
}

// ------------- Toolbox -------------
/// Holds any driver and any puller.
///
/// Rust has no embedding of interface values, so the toolbox forwards each
/// contract to the tool assigned to it. Once both slots are filled the
/// toolbox is itself a [`NailDrivePuller`].
#[derive(Debug, Clone, Default)]
pub struct Toolbox<D, P> {
    driver: D,
    puller: P,
}

impl<D, P> Toolbox<D, P> {
    pub fn new(driver: D, puller: P) -> Self {
        Self { driver, puller }
    }
}

impl<D: NailDriver, P> NailDriver for Toolbox<D, P> {
    fn drive_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str {
        self.driver.drive_nail(supply, board)
    }
}

impl<D, P: NailPuller> NailPuller for Toolbox<D, P> {
    fn pull_nail(&self, supply: &mut NailSupply, board: &mut Board) -> &'static str {
        self.puller.pull_nail(supply, board)
    }
}

/// A toolbox whose tools were chosen at runtime.
pub type DynToolbox = Toolbox<Box<dyn NailDriver>, Box<dyn NailPuller>>;

// ------------- Tool Selection -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverKind {
    #[default]
    Mallet,
    ClawHammer,
}

impl DriverKind {
    pub fn build(self) -> Box<dyn NailDriver> {
        match self {
            DriverKind::Mallet => Box::new(Mallet),
            DriverKind::ClawHammer => Box::new(ClawHammer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PullerKind {
    #[default]
    Crowbar,
    ClawHammer,
}

impl PullerKind {
    pub fn build(self) -> Box<dyn NailPuller> {
        match self {
            PullerKind::Crowbar => Box::new(Crowbar),
            PullerKind::ClawHammer => Box::new(ClawHammer),
        }
    }
}

/// Fills a toolbox with the selected tools.
pub fn fill_toolbox(driver: DriverKind, puller: PullerKind) -> DynToolbox {
    Toolbox::new(driver.build(), puller.build())
}
