//! The roster of selectable fighters shown in the grid.
//!
//! Each grid cell is paired by index with one `Fighter`, which carries the
//! name and portrait shown in the overlay once the cell is chosen.

mod builtin;
mod load;
mod model;

pub use load::*;
pub use model::*;

#[cfg(test)]
mod tests;
