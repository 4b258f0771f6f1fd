//! Streaming WKT and EWKT text emission for 2D geometries.
//!
//! The [`WktBuilder`] turns a sequence of coordinate events into Well-Known
//! Text. Points are emitted in one shot; linestrings and multipolygons are
//! accumulated incrementally into an internal buffer which is moved out to
//! the caller on `finish`, leaving the builder ready for the next geometry.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod coord;
mod wkt;

pub use coord::*;
pub use wkt::*;
