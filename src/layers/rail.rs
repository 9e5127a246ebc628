//! Railway layers, split into light and heavy rail.
//!
//! Heavy rail is standard rail plus subways; light rail covers trams,
//! monorails, funiculars and other city rail. Both render a "ties" dash
//! layer on top of the base line at close zooms.

use serde_json::{json, Value};

use crate::color::mix;
use crate::config::StyleConfig;
use crate::defs::DEFS;
use crate::style::{Layer, LayerType};
use crate::Result;

/// Builds every rail layer of one stacking band.
pub fn rail(config: &StyleConfig, layer_num: i32, layer_filter: &Value) -> Result<Vec<Layer>> {
    let color = config.pick(&DEFS.rail);
    let tunnel_color = mix(color, config.pick(&DEFS.colors.background), 0.7)?;
    let bridge_color = mix(color, "#000000", 0.75)?;

    let light_rail_filter = json!([
        "any",
        [
            "all",
            ["==", ["get", "class"], "rail"],
            ["!=", ["get", "subclass"], "rail"],
        ],
        [
            "all",
            ["==", ["get", "class"], "transit"],
            [
                "in",
                ["get", "subclass"],
                ["literal", ["light_rail", "monorail", "funicular", "tram"]],
            ],
        ],
    ]);

    let light_rail_width = json!([
        "interpolate",
        ["linear"],
        ["zoom"],
        8,
        0.25,
        13,
        0.5,
        16,
        2,
    ]);

    let heavy_rail_filter = json!([
        "all",
        [
            "any",
            [
                "all",
                ["==", ["get", "class"], "rail"],
                ["==", ["get", "subclass"], "rail"],
            ],
            [
                "all",
                ["==", ["get", "class"], "transit"],
                ["==", ["get", "subclass"], "subway"],
            ],
        ],
        ["!=", ["get", "service"], "yard"],
    ]);

    Ok(vec![
        Layer {
            filter: Some(json!([
                "all",
                layer_filter,
                light_rail_filter,
                ["==", ["get", "brunnel"], "bridge"],
            ])),
            paint: Some(json!({
                "line-color": bridge_color,
                "line-width": light_rail_width,
            })),
            ..Layer::on(
                "transportation",
                format!("light-rail-{layer_num}-bridge-casing"),
                LayerType::Line,
            )
        },
        Layer {
            filter: Some(json!([
                "all",
                layer_filter,
                light_rail_filter,
                ["!=", ["get", "brunnel"], "tunnel"],
            ])),
            paint: Some(json!({
                "line-color": color,
                "line-width": light_rail_width,
            })),
            ..Layer::on(
                "transportation",
                format!("light-rail-{layer_num}"),
                LayerType::Line,
            )
        },
        Layer {
            filter: Some(json!([
                "all",
                layer_filter,
                light_rail_filter,
                ["==", ["get", "brunnel"], "tunnel"],
            ])),
            paint: Some(json!({
                "line-color": tunnel_color,
                "line-dasharray": [1, 0.5],
                "line-width": light_rail_width,
            })),
            ..Layer::on(
                "transportation",
                format!("light-rail-{layer_num}-tunnel"),
                LayerType::Line,
            )
        },
        Layer {
            minzoom: Some(13.0),
            filter: Some(json!(["all", layer_filter, light_rail_filter])),
            paint: Some(json!({
                "line-color": [
                    "case",
                    ["==", ["get", "brunnel"], "tunnel"],
                    tunnel_color,
                    color,
                ],
                "line-dasharray": [0.3, 1.5],
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    13,
                    0.5,
                    16,
                    4,
                ],
            })),
            ..Layer::on(
                "transportation",
                format!("light-rail-{layer_num}-ties"),
                LayerType::Line,
            )
        },
        Layer {
            minzoom: Some(13.0),
            filter: Some(json!([
                "all",
                layer_filter,
                heavy_rail_filter,
                ["==", ["get", "brunnel"], "bridge"],
            ])),
            paint: Some(json!({
                "line-color": bridge_color,
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    14,
                    0.5,
                    16,
                    8,
                ],
            })),
            ..Layer::on(
                "transportation",
                format!("heavy-rail-{layer_num}-bridge-casing"),
                LayerType::Line,
            )
        },
        Layer {
            filter: Some(json!([
                "all",
                layer_filter,
                heavy_rail_filter,
                ["!=", ["get", "brunnel"], "tunnel"],
            ])),
            paint: Some(json!({
                "line-color": color,
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    14,
                    0.5,
                    16,
                    4,
                ],
            })),
            ..Layer::on(
                "transportation",
                format!("heavy-rail-{layer_num}"),
                LayerType::Line,
            )
        },
        Layer {
            filter: Some(json!([
                "all",
                layer_filter,
                heavy_rail_filter,
                ["==", ["get", "brunnel"], "tunnel"],
            ])),
            paint: Some(json!({
                "line-color": tunnel_color,
                "line-dasharray": [2, 0.5],
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    14,
                    0.5,
                    16,
                    4,
                ],
            })),
            ..Layer::on(
                "transportation",
                format!("heavy-rail-{layer_num}-tunnel"),
                LayerType::Line,
            )
        },
        Layer {
            minzoom: Some(14.0),
            filter: Some(json!([
                "all",
                heavy_rail_filter,
                layer_filter,
                ["!=", ["get", "brunnel"], "tunnel"],
            ])),
            paint: Some(json!({
                "line-color": config.pick(&DEFS.colors.background),
                "line-dasharray": [2, 2],
                "line-width": [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    14,
                    0.25,
                    16,
                    2,
                ],
            })),
            ..Layer::on(
                "transportation",
                format!("heavy-rail-{layer_num}-ties"),
                LayerType::Line,
            )
        },
    ])
}
