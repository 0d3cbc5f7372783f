//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod pick;
pub mod regions;
pub mod replay;
pub mod sfx;
pub mod songs;
