//! Carpentry – two small programs about composing behavior in Rust.
//!
//! The crate is built around an analogy: tools working on the nail count of a
//! board. It backs two binaries.
//!
//! ## Workflow (`workflow` binary)
//! * A [`board::Board`] tracks how many nails it needs and how many it holds.
//! * A [`board::NailSupply`] is the shared pile of loose nails.
//! * [`tool::NailDriver`] and [`tool::NailPuller`] are two small contracts,
//!   composed into [`tool::NailDrivePuller`].
//! * A [`tool::Toolbox`] holds any driver and any puller and forwards to
//!   them, which makes the toolbox a drive-puller itself.
//! * A [`contractor::Contractor`] sweeps a list of boards and uses whatever
//!   tools it is handed to bring each board to its target.
//!
//! ## Record composition (`promotion` binary)
//! * [`promotion::Admin`] embeds a [`promotion::User`] and forwards the
//!   user's fields and `notify` method, so the inner and outer call paths
//!   produce the same output.
//!
//! ## Settings & Logging
//! Both binaries read an optional `carpentry.toml` (see [`settings`]) and log
//! through `tracing` to stderr (see [`logging`]); stdout only carries the
//! demo transcript.
//!
//! ## Quick Start
//! ```
//! use carpentry::board::{Board, NailSupply};
//! use carpentry::contractor::Contractor;
//! use carpentry::tool::{Crowbar, Mallet, Toolbox};
//! let toolbox = Toolbox::new(Mallet, Crowbar);
//! let mut supply = NailSupply::new(10);
//! let mut boards = vec![Board::rotted(3), Board::fresh(6)];
//! let mut transcript = Vec::new();
//! let report = Contractor::new()
//!     .process_boards(&toolbox, &mut supply, &mut boards, &mut transcript)
//!     .unwrap();
//! assert!(boards.iter().all(Board::is_secured));
//! assert_eq!(supply.count(), 7);
//! assert_eq!((report.driven, report.pulled), (6, 3));
//! ```

pub mod board;
pub mod contractor;
pub mod error;
pub mod logging;
pub mod promotion;
pub mod settings;
pub mod tool;

pub use error::{CarpentryError, Result};
