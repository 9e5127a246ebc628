//! Natural land cover fills.

use serde_json::json;

use crate::config::StyleConfig;
use crate::defs::{ColorDef, DEFS};
use crate::style::{Layer, LayerType};

/// One fill layer over every land cover class the catalogue colors.
///
/// Colors fade in from the background so low zooms stay calm.
pub fn landcover(config: &StyleConfig) -> Layer {
    let classes: Vec<&str> = DEFS.landcover.iter().map(|(class, _)| *class).collect();

    Layer {
        filter: Some(json!(["in", ["get", "class"], ["literal", classes]])),
        paint: Some(json!({
            "fill-color": [
                "interpolate",
                ["exponential", 1.5],
                ["zoom"],
                7,
                config.pick(&DEFS.colors.background),
                10,
                config.color_match(DEFS.landcover, &ColorDef::Scalar("transparent"), None),
            ],
        })),
        ..Layer::on("landcover", "landcover", LayerType::Fill)
    }
}
