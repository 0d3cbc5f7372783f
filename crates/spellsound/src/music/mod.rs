//! Region-driven background music.

mod builtin;
mod playback;
mod player;
mod selector;
mod song;
mod watcher;

pub use builtin::*;
pub use playback::*;
pub use player::*;
pub use selector::*;
pub use song::*;
pub use watcher::*;
