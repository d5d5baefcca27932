//! Board engine for a single-player mine-detection puzzle.
//!
//! [`BoardEngine`] owns the mine layout, cell states and phase; renderers poll it (or a
//! [`BoardSnapshot`]) after every command, and a [`PlayClock`] can follow its [`PhaseChange`]
//! events to drive an elapsed-time display.

pub use cell::*;
pub use clock::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use generator::*;
pub use layout::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod clock;
mod config;
mod engine;
mod error;
mod events;
mod generator;
mod layout;
mod session;
mod snapshot;
mod types;
