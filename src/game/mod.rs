//! Game state machine
//!
//! One game's lifecycle: creation, guessing, surrender, the public projection,
//! and the portable record used by storage layers.

mod error;
mod projection;
mod record;
mod state;

pub use error::{GameError, InvalidReason};
pub use projection::GameView;
pub use record::{GameRecord, RecordError};
pub use state::{Game, GameStatus};
