//! Water fills, waterway lines, water name labels and ferry routes.

use serde_json::{json, Value};

use crate::color::mix;
use crate::config::StyleConfig;
use crate::defs::DEFS;
use crate::expr::{is_linestring, is_point};
use crate::style::{Layer, LayerType};
use crate::Result;

/// Ocean and inland water bodies.
pub fn water_fill(config: &StyleConfig) -> Layer {
    Layer {
        paint: Some(json!({
            "fill-color": config.pick(&DEFS.colors.water),
        })),
        ..Layer::on("water", "water-fill", LayerType::Fill)
    }
}

/// Rivers and streams too narrow for a polygon.
pub fn water_line(config: &StyleConfig) -> Layer {
    Layer {
        paint: Some(json!({
            "line-color": config.pick(&DEFS.colors.water),
            "line-width": [
                "interpolate",
                ["exponential", 1.5],
                ["zoom"],
                4,
                1,
                14,
                2,
                18,
                8,
            ],
        })),
        ..Layer::on("waterway", "water-line", LayerType::Line)
    }
}

fn water_label_size(config: &StyleConfig) -> Value {
    json!([
        "match",
        ["get", "class"],
        "ocean",
        config.text_size(18.0),
        "sea",
        config.text_size(16.0),
        ["river", "lake"],
        config.text_size(14.0),
        config.text_size(10.0),
    ])
}

fn water_label_color(config: &StyleConfig) -> Result<String> {
    let water_color = config.pick(&DEFS.colors.water);
    if config.color_scheme.is_dark() {
        mix(water_color, "#ffffff", 0.6)
    } else {
        mix(water_color, "#000000", 0.7)
    }
}

/// Labels for water bodies represented as points.
pub fn water_name(config: &StyleConfig) -> Result<Layer> {
    Ok(Layer {
        filter: Some(is_point()),
        layout: Some(json!({
            "text-field": config.localized_name(),
            "text-font": config.fonts("Regular"),
            "text-size": water_label_size(config),
        })),
        paint: Some(json!({
            "text-color": water_label_color(config)?,
        })),
        metadata: Some(json!({
            "libshumate:cursor": "pointer",
        })),
        ..Layer::on("water_name", "water-name", LayerType::Symbol)
    })
}

/// Labels for water bodies represented as lines.
pub fn water_name_line(config: &StyleConfig) -> Result<Layer> {
    Ok(Layer {
        filter: Some(is_linestring()),
        layout: Some(json!({
            "text-field": config.localized_name(),
            "text-font": config.fonts("Regular"),
            "text-size": water_label_size(config),
            "symbol-placement": "line",
        })),
        paint: Some(json!({
            "text-color": water_label_color(config)?,
        })),
        ..Layer::on("water_name", "water-name-line", LayerType::Symbol)
    })
}

/// Waterway name labels, placed along the line.
pub fn waterway_name(config: &StyleConfig) -> Result<Layer> {
    Ok(Layer {
        filter: Some(is_linestring()),
        layout: Some(json!({
            "text-field": config.localized_name(),
            "text-font": config.fonts("Regular"),
            "text-size": water_label_size(config),
            "symbol-placement": "line",
        })),
        paint: Some(json!({
            "text-color": water_label_color(config)?,
        })),
        metadata: Some(json!({
            "libshumate:cursor": "pointer",
        })),
        ..Layer::on("waterway", "waterway-name", LayerType::Symbol)
    })
}

/// Dashed ferry route lines.
pub fn ferry_line(config: &StyleConfig) -> Result<Layer> {
    Ok(Layer {
        minzoom: Some(11.0),
        filter: Some(json!(["==", ["get", "class"], "ferry"])),
        paint: Some(json!({
            "line-color": water_label_color(config)?,
            "line-dasharray": [5, 3],
            "line-width": ["interpolate", ["linear"], ["zoom"], 11, 0.5, 16, 2],
        })),
        ..Layer::on("transportation", "ferry-line", LayerType::Line)
    })
}

/// Ferry route name labels.
pub fn ferry_line_name(config: &StyleConfig) -> Result<Layer> {
    Ok(Layer {
        minzoom: Some(11.0),
        filter: Some(json!(["==", ["get", "class"], "ferry"])),
        layout: Some(json!({
            "text-field": ["get", "name"],
            "text-font": config.fonts("Regular"),
            "text-size": config.text_size(15.0),
            "symbol-placement": "line",
        })),
        paint: Some(json!({
            "text-color": mix(
                &water_label_color(config)?,
                config.scheme("#ffffff", "#000000"),
                0.5
            )?,
        })),
        ..Layer::on("transportation_name", "ferry-line-name", LayerType::Symbol)
    })
}
