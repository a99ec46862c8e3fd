//! Validation utilities for matrix text and matrix shapes
//!
//! Pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;
pub mod shape;

pub use bounds::{check_index, coordinate_in_range};
pub use parsing::{parse_integer, parse_keyed, split_entry};
pub use shape::{check_multipliable, check_same_shape};
