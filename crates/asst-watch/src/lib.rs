// region:    --- Modules

pub mod ais;
mod error;
pub mod event;
pub mod poller;
mod session;
mod utils;

pub use self::error::{Error, Result};

pub use crate::session::*;

// endregion: --- Modules
