//! Configuration loader and schema types.
//!
//! Settings cover where clips live, how the pointer behaves, the grid layout,
//! the roster file and logging.

mod load;
mod schema;

pub use schema::*;
