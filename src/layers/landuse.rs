//! Land use fills.

use serde_json::json;

use crate::config::StyleConfig;
use crate::defs::{ColorDef, DEFS};
use crate::style::{Layer, LayerType};

pub fn landuse(config: &StyleConfig) -> Layer {
    let classes: Vec<&str> = DEFS.landuse.iter().map(|(class, _)| *class).collect();

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
                config.color_match(DEFS.landuse, &ColorDef::Scalar("transparent"), None),
            ],
        })),
        ..Layer::on("landuse", "landuse", LayerType::Fill)
    }
}
