//! Building footprints.

use serde_json::json;

use crate::color::mix;
use crate::config::StyleConfig;
use crate::defs::DEFS;
use crate::style::{Layer, LayerType};
use crate::Result;

/// Building fill and outline. Ground level only; building parts are left to
/// the feature carrying the whole outline.
pub fn buildings(config: &StyleConfig) -> Result<Vec<Layer>> {
    Ok(vec![
        Layer {
            filter: Some(json!(["!", ["has", "part"]])),
            paint: Some(json!({
                "fill-color": config.pick(&DEFS.buildings),
                "fill-opacity": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    13,
                    0.15,
                    14,
                    0.25,
                    18,
                    0.5,
                ],
            })),
            ..Layer::on("building", "buildings", LayerType::Fill)
        },
        Layer {
            minzoom: Some(15.0),
            paint: Some(json!({
                "line-color": mix(
                    config.pick(&DEFS.buildings),
                    "#000000",
                    config.scheme(1.33, 0.75),
                )?,
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    15,
                    0.05,
                    18,
                    config.scheme(1.0, 0.5),
                ],
            })),
            ..Layer::on("building", "buildings-outline", LayerType::Line)
        },
    ])
}
