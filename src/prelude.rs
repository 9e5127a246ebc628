//! Prelude module for common mapstyle types and functions
//!
//! This module re-exports the most commonly used types and functions
//! for easy importing with `use mapstyle::prelude::*;`

pub use crate::config::{ColorScheme, Renderer, StyleConfig, StyleOptions};

pub use crate::color::{hex_to_rgb, mix, rgb_to_hex};

pub use crate::defs::{ColorDef, DEFS};

pub use crate::style::{generate_map_style, Layer, LayerType, StyleDocument, VectorSource};

pub use crate::{Error as StyleError, Result};
