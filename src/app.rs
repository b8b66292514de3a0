//! Application module: the select-screen model driven by input events.
//!
//! `App` owns the roster, the soundboard and the overlay state; `Input`
//! enumerates every event the runtime can feed it.

mod input;
mod model;

pub use input::*;
pub use model::*;

#[cfg(test)]
mod tests;
