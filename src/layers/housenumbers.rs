//! House number labels, shown only at the closest zooms.

use serde_json::json;

use crate::config::StyleConfig;
use crate::defs::DEFS;
use crate::style::{Layer, LayerType};

pub fn housenumbers(config: &StyleConfig) -> Layer {
    Layer {
        minzoom: Some(18.0),
        layout: Some(json!({
            "text-field": ["get", "housenumber"],
            "text-font": config.fonts("Regular"),
            "text-size": [
                "interpolate",
                ["linear"],
                ["zoom"],
                18,
                config.text_size(9.0),
                20,
                config.text_size(11.0),
            ],
        })),
        paint: Some(json!({
            "text-color": config.pick(&DEFS.housenumbers),
        })),
        metadata: Some(json!({
            "libshumate:cursor": "pointer",
        })),
        ..Layer::on("housenumber", "housenumbers", LayerType::Symbol)
    }
}
