//! Airport ground layers (runways, taxiways) and aerodrome symbols.

use serde_json::{json, Value};

use crate::color::mix;
use crate::config::StyleConfig;
use crate::defs::DEFS;
use crate::expr::{is_linestring, is_polygon};
use crate::style::{Layer, LayerType};
use crate::Result;

/// Runway and taxiway geometry. Ground level only, so these render once
/// rather than per stacking band.
pub fn airport_layers(config: &StyleConfig) -> Result<Vec<Layer>> {
    // Fade the runways in from the background between z10 and z12
    let color: Value = json!([
        "interpolate",
        ["linear"],
        ["zoom"],
        10,
        mix(
            config.pick(&DEFS.airports.runway_color),
            config.pick(&DEFS.colors.background),
            0.5
        )?,
        12,
        config.pick(&DEFS.airports.runway_color),
    ]);

    Ok(vec![
        Layer {
            minzoom: Some(10.0),
            filter: Some(json!([
                "all",
                is_linestring(),
                ["==", ["get", "class"], "runway"],
            ])),
            paint: Some(json!({
                "line-color": color,
                "line-width": [
                    "interpolate",
                    ["exponential", 2],
                    ["zoom"],
                    10,
                    4,
                    18,
                    100,
                ],
            })),
            ..Layer::on("aeroway", "runway-line", LayerType::Line)
        },
        Layer {
            minzoom: Some(10.0),
            filter: Some(json!([
                "all",
                is_linestring(),
                ["==", ["get", "class"], "taxiway"],
            ])),
            paint: Some(json!({
                "line-color": color,
                "line-width": [
                    "interpolate",
                    ["exponential", 2],
                    ["zoom"],
                    10,
                    2,
                    18,
                    10,
                ],
            })),
            ..Layer::on("aeroway", "taxiway-line", LayerType::Line)
        },
        Layer {
            minzoom: Some(12.0),
            filter: Some(json!([
                "all",
                is_polygon(),
                ["in", ["get", "class"], ["literal", ["runway", "taxiway"]]],
            ])),
            paint: Some(json!({
                "fill-color": color,
            })),
            ..Layer::on("aeroway", "runway-fill", LayerType::Fill)
        },
    ])
}

/// Aerodrome name symbols, limited to airports with an IATA code.
pub fn airport_symbols(config: &StyleConfig) -> Vec<Layer> {
    let color = config.pick(&DEFS.airports.symbol_color);

    vec![Layer {
        minzoom: Some(10.0),
        filter: Some(json!(["has", "iata"])),
        layout: Some(json!({
            "icon-image": "flying-symbolic",
            "text-anchor": "top",
            "text-offset": [0, 0.7],
            "text-field": config.localized_name(),
            "text-font": config.fonts("Italic"),
            "text-size": config.text_size(12.0),
            "text-optional": true,
        })),
        paint: Some(json!({
            "icon-color": color,
            "text-color": color,
        })),
        metadata: Some(json!({
            "libshumate:cursor": "pointer",
        })),
        ..Layer::on("aerodrome_label", "airport-symbols", LayerType::Symbol)
    }]
}
