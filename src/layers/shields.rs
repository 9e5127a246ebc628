//! Highway shield symbols.
//!
//! The shield layer is a pre-built, versioned artifact produced by a
//! separate pipeline together with the shield sprite sheet; it is embedded
//! verbatim rather than synthesized. MapLibre GL JS handles shields through
//! its own sprite mechanism, so the layer is only emitted for libshumate.

use crate::config::{Renderer, StyleConfig};
use crate::style::Layer;
use crate::{Result, StyleError};

static SHIELD_LAYER: &str = include_str!("../../resources/shield-layer.json");

/// The pre-built shield layer, or `None` when the target renderer draws
/// shields itself.
pub fn highway_shield(config: &StyleConfig) -> Result<Option<Layer>> {
    if config.renderer == Renderer::MaplibreGlJs {
        return Ok(None);
    }

    let layer: Layer = serde_json::from_str(SHIELD_LAYER).map_err(StyleError::ShieldResource)?;
    Ok(Some(layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleOptions;

    #[test]
    fn test_emitted_only_for_libshumate() {
        let libshumate = StyleConfig::new(&StyleOptions::default());
        let shield = highway_shield(&libshumate).unwrap().unwrap();
        assert_eq!(shield.id, "highway-shield");
        assert_eq!(shield.source_layer.as_deref(), Some("transportation_name"));

        let maplibre = StyleConfig::new(&StyleOptions {
            renderer: Renderer::MaplibreGlJs,
            ..Default::default()
        });
        assert!(highway_shield(&maplibre).unwrap().is_none());
    }
}
