//! Activity inference.
//!
//! This module contains:
//! - `RawActivity`, `DerivedEvent`, `PlayerEvent` - event model
//! - `InventorySnapshot` and `InventoryTracker` - per-tick inventory diff
//! - `ActivityDeriver` - state machine turning raw states into events
//! - `ActivityMonitor` - throttled polling of the host

mod deriver;
mod event;
mod inventory;
mod monitor;

pub use deriver::*;
pub use event::*;
pub use inventory::*;
pub use monitor::*;
