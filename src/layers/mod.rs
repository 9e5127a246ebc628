//! Per-theme layer builders.
//!
//! Each builder is a pure function from the resolved configuration (and the
//! static catalogue) to one or more layer records; the assembler in
//! [`crate::style`] decides ordering.

pub mod aerial;
pub mod airports;
pub mod boundaries;
pub mod buildings;
pub mod housenumbers;
pub mod landcover;
pub mod landuse;
pub mod places;
pub mod pois;
pub mod rail;
pub mod roads;
pub mod shields;
pub mod water;
