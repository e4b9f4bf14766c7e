//! The contractor owns the workflow: when and how a tool is used.
//!
//! Tools are borrowed behavior. [`Contractor::fasten`] only needs a
//! [`NailDriver`], [`Contractor::unfasten`] only needs a [`NailPuller`], and
//! [`Contractor::process_boards`] asks for the composed [`NailDrivePuller`]
//! and hands that same value to both loops.

use std::io::Write;

use tracing::info;

use crate::Result;
use crate::board::{Board, NailSupply};
use crate::tool::{NailDrivePuller, NailDriver, NailPuller};

/// What a sweep over a set of boards amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkReport {
    pub boards: usize,
    pub driven: u64,
    pub pulled: u64,
    pub untouched: usize,
}

/// Carries out the task of securing boards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contractor;

impl Contractor {
    pub fn new() -> Self {
        Self
    }

    /// Drives nails until the board holds as many as it needs.
    /// Returns the number of nails driven.
    pub fn fasten<D, W>(
        &self,
        driver: &D,
        supply: &mut NailSupply,
        board: &mut Board,
        out: &mut W,
    ) -> Result<u64>
    where
        D: NailDriver + ?Sized,
        W: Write + ?Sized,
    {
        let mut driven = 0;
        while board.nails_driven() < board.nails_needed() {
            let notice = driver.drive_nail(supply, board);
            writeln!(out, "{notice}")?;
            driven += 1;
        }
        Ok(driven)
    }

    /// Pulls nails until the board holds no more than it needs.
    /// Returns the number of nails pulled.
    pub fn unfasten<P, W>(
        &self,
        puller: &P,
        supply: &mut NailSupply,
        board: &mut Board,
        out: &mut W,
    ) -> Result<u64>
    where
        P: NailPuller + ?Sized,
        W: Write + ?Sized,
    {
        let mut pulled = 0;
        while board.nails_driven() > board.nails_needed() {
            let notice = puller.pull_nail(supply, board);
            writeln!(out, "{notice}")?;
            pulled += 1;
        }
        Ok(pulled)
    }

    /// Examines every board in order and brings each one to its target,
    /// driving or pulling as needed. Boards already at target are left alone.
    pub fn process_boards<T, W>(
        &self,
        tools: &T,
        supply: &mut NailSupply,
        boards: &mut [Board],
        out: &mut W,
    ) -> Result<WorkReport>
    where
        T: NailDrivePuller + ?Sized,
        W: Write + ?Sized,
    {
        let mut report = WorkReport::default();
        for (i, board) in boards.iter_mut().enumerate() {
            writeln!(out, "Contractor: examining board #{}: {}", i + 1, board)?;
            info!(
                board = i + 1,
                needed = board.nails_needed(),
                driven = board.nails_driven(),
                "examining board"
            );

            if board.nails_driven() < board.nails_needed() {
                report.driven += self.fasten(tools, supply, board, out)?;
            } else if board.nails_driven() > board.nails_needed() {
                report.pulled += self.unfasten(tools, supply, board, out)?;
            } else {
                report.untouched += 1;
            }
            report.boards += 1;
        }
        info!(
            boards = report.boards,
            driven = report.driven,
            pulled = report.pulled,
            supply = supply.count(),
            "all boards processed"
        );
        Ok(report)
    }
}
