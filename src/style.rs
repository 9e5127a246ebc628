//! The style document model and the generator entry point.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::{StyleConfig, StyleOptions};
use crate::defs::DEFS;
use crate::expr;
use crate::layers::{
    aerial::{aerial, aerial_label},
    airports::{airport_layers, airport_symbols},
    boundaries::boundary_layers,
    buildings::buildings,
    housenumbers::housenumbers,
    landcover::landcover,
    landuse::landuse,
    places::places,
    pois::pois,
    rail::rail,
    roads::{junction_symbol, road_symbol, roads},
    shields::highway_shield,
    water::{
        ferry_line, ferry_line_name, water_fill, water_line, water_name, water_name_line,
        waterway_name,
    },
};
use crate::Result;

/// Name of the single vector tile source every layer references.
pub const VECTOR_SOURCE: &str = "vector-tiles";

/// Tile URL template used when the caller does not supply one.
pub const DEFAULT_TILE_URL: &str = "https://tileserver.gnome.org/data/v3/{z}/{x}/{y}.pbf";

/// Glyph URL template; required by MapLibre GL JS, ignored by libshumate.
const GLYPHS_URL: &str = "https://tileserver.gnome.org/fonts/{fontstack}/{range}.pbf";

/// Rendering type of a style layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    #[default]
    Background,
    Fill,
    Line,
    Symbol,
}

/// One layer of the style document.
///
/// Filters and paint/layout properties are map-style expressions carried as
/// opaque JSON values; they are produced here and evaluated by the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layer {
    /// Unique id across the whole document
    pub id: String,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "source-layer", skip_serializing_if = "Option::is_none")]
    pub source_layer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paint: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Layer {
    /// Starts a layer bound to the vector tile source.
    pub fn on(source_layer: &str, id: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            id: id.into(),
            layer_type,
            source: Some(VECTOR_SOURCE.to_string()),
            source_layer: Some(source_layer.to_string()),
            ..Default::default()
        }
    }
}

/// The vector tile source descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub tiles: Vec<String>,
    pub minzoom: u8,
    pub maxzoom: u8,
}

/// All tile sources of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sources {
    #[serde(rename = "vector-tiles")]
    pub vector_tiles: VectorSource,
}

/// A complete map style document, ready for a renderer or for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    pub version: u8,
    pub name: String,
    pub sources: Sources,
    pub glyphs: String,
    pub layers: Vec<Layer>,
}

/// Generates the map style using the given options.
///
/// The result is a snapshot: callers needing another scheme or scale call
/// again and swap the document. Layer order is significant; layers are drawn
/// bottom to top in array order.
pub fn generate_map_style(options: &StyleOptions) -> Result<StyleDocument> {
    #[cfg(feature = "debug")]
    let start = std::time::Instant::now();

    let config = StyleConfig::new(options);

    let mut layered_layers = Vec::new();
    for layer_num in DEFS.min_layer..=DEFS.max_layer {
        let filter = expr::layer_band_filter(layer_num);

        layered_layers.extend(roads(&config, layer_num, &filter)?);
        layered_layers.extend(rail(&config, layer_num, &filter)?);
        layered_layers.extend(aerial(&config, layer_num, &filter));

        if layer_num == 0 {
            layered_layers.extend(airport_layers(&config)?);
            layered_layers.extend(buildings(&config)?);
        }
    }

    let mut layers = vec![Layer {
        id: "background".to_string(),
        layer_type: LayerType::Background,
        paint: Some(json!({
            "background-color": config.pick(&DEFS.colors.background),
        })),
        ..Default::default()
    }];
    layers.push(landcover(&config));
    layers.push(landuse(&config));
    layers.push(water_fill(&config));
    layers.push(water_line(&config));
    layers.extend(boundary_layers(&config));
    layers.append(&mut layered_layers);
    layers.push(ferry_line(&config)?);
    layers.push(water_name(&config)?);
    layers.push(water_name_line(&config)?);
    layers.push(waterway_name(&config)?);
    layers.push(ferry_line_name(&config)?);
    layers.push(housenumbers(&config));
    layers.extend(pois(&config));
    layers.push(road_symbol(&config));
    layers.push(junction_symbol(&config));
    if let Some(shield) = highway_shield(&config)? {
        layers.push(shield);
    }
    layers.push(aerial_label(&config)?);
    layers.extend(airport_symbols(&config));
    layers.extend(places(&config));

    let style = StyleDocument {
        version: 8,
        name: format!(
            "GNOME Maps {}",
            if config.color_scheme.is_dark() {
                "Dark"
            } else {
                "Light"
            }
        ),
        sources: Sources {
            vector_tiles: VectorSource {
                source_type: "vector".to_string(),
                tiles: vec![options
                    .tile_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TILE_URL.to_string())],
                minzoom: 0,
                maxzoom: 14,
            },
        },
        glyphs: GLYPHS_URL.to_string(),
        layers,
    };

    #[cfg(feature = "debug")]
    log::debug!("Map style generated in {:?}", start.elapsed());

    Ok(style)
}
