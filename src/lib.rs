//! # mapstyle
//!
//! A vector-tile map style generator.
//!
//! This library deterministically produces a complete MapLibre GL style
//! document (sources, layers, paint/layout expressions and filters) from a
//! small configuration: color scheme, renderer target, text scale and tile
//! URL. Callers hand the resulting document to a vector-map renderer or
//! serialize it to disk; regenerating on theme change is cheap.

pub mod color;
pub mod config;
pub mod defs;
pub mod expr;
pub mod layers;
pub mod prelude;
pub mod style;

// Re-export public API
pub use config::{ColorScheme, Renderer, StyleConfig, StyleOptions};

pub use defs::{ColorDef, DEFS};

pub use style::{generate_map_style, Layer, LayerType, StyleDocument, VectorSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, StyleError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Shield layer resource: {0}")]
    ShieldResource(#[source] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = StyleError;
