//! Sound effects for player activity.

mod catalog;
mod dispatcher;
mod types;

pub use catalog::*;
pub use dispatcher::*;
pub use types::*;
