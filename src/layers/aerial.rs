//! Aerialway transport: <https://wiki.openstreetmap.org/wiki/Map_features#Aerialway>

use serde_json::{json, Value};

use crate::color::mix;
use crate::config::StyleConfig;
use crate::defs::DEFS;
use crate::style::{Layer, LayerType};
use crate::Result;

fn cable_car_filter() -> Value {
    json!([
        "all",
        ["==", ["get", "class"], "aerialway"],
        [
            "in",
            ["get", "subclass"],
            ["literal", ["cable_car", "gondola", "mixed_lift"]],
        ],
    ])
}

fn lift_filter() -> Value {
    json!([
        "all",
        ["==", ["get", "class"], "aerialway"],
        [
            "in",
            ["get", "subclass"],
            [
                "literal",
                [
                    "chair_lift",
                    "drag_lift",
                    "t-bar",
                    "j-bar",
                    "platter",
                    "rope_tow",
                    "zip-line",
                ],
            ],
        ],
    ])
}

/// Builds the cable car and lift layers of one stacking band.
pub fn aerial(config: &StyleConfig, layer_num: i32, layer_filter: &Value) -> Vec<Layer> {
    let color = config.pick(&DEFS.aerial);

    vec![
        Layer {
            filter: Some(json!(["all", layer_filter, cable_car_filter()])),
            paint: Some(json!({
                "line-color": color,
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    8,
                    0.25,
                    13,
                    0.5,
                    16,
                    2,
                ],
            })),
            ..Layer::on(
                "transportation",
                format!("cable-car-{layer_num}"),
                LayerType::Line,
            )
        },
        Layer {
            minzoom: Some(13.0),
            filter: Some(json!(["all", layer_filter, cable_car_filter()])),
            paint: Some(json!({
                "line-color": color,
                "line-dasharray": [0.3, 5],
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    13,
                    2,
                    16,
                    10,
                ],
            })),
            ..Layer::on(
                "transportation",
                format!("cable-car-{layer_num}-ties"),
                LayerType::Line,
            )
        },
        Layer {
            filter: Some(json!(["all", layer_filter, lift_filter()])),
            paint: Some(json!({
                "line-color": color,
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    8,
                    0.25,
                    13,
                    0.5,
                    16,
                    2,
                ],
            })),
            ..Layer::on("transportation", format!("lift-{layer_num}"), LayerType::Line)
        },
        Layer {
            minzoom: Some(13.0),
            filter: Some(json!(["all", lift_filter(), layer_filter])),
            paint: Some(json!({
                "line-color": color,
                "line-dasharray": [0.3, 10],
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    13,
                    2,
                    16,
                    10,
                ],
            })),
            ..Layer::on(
                "transportation",
                format!("lift-{layer_num}-ties"),
                LayerType::Line,
            )
        },
    ]
}

/// Aerialway name labels, placed along the line.
pub fn aerial_label(config: &StyleConfig) -> Result<Layer> {
    let color = config.pick(&DEFS.aerial);
    let label_color = config.scheme(mix(color, "#ffffff", 0.3)?, mix(color, "#000000", 0.6)?);

    Ok(Layer {
        minzoom: Some(13.0),
        filter: Some(json!(["any", cable_car_filter(), lift_filter()])),
        layout: Some(json!({
            "text-field": ["get", "name"],
            "text-size": config.text_size(15.0),
            "text-font": config.fonts("Regular"),
            "symbol-placement": "line",
        })),
        paint: Some(json!({
            "text-color": label_color,
        })),
        ..Layer::on("transportation_name", "aerial-labels", LayerType::Symbol)
    })
}
