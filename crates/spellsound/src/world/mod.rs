//! World coordinates and the spatial region index.

mod builtin;
mod index;
mod region;
mod vector;

pub use builtin::*;
pub use index::*;
pub use region::*;
pub use vector::*;
