//! Road layers: casings, surfaces, polygon fills, oneway arrows and labels.
//!
//! Every road class renders as a casing/surface pair with bridge, tunnel and
//! unpaved variants, repeated once per stacking band so bridges draw above
//! the roads they cross.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::color::mix;
use crate::config::StyleConfig;
use crate::defs::DEFS;
use crate::expr::{is_linestring, is_polygon};
use crate::style::{Layer, LayerType};
use crate::Result;

/// Every road class the style renders; label and arrow filters use it to
/// skip classes without a rendering of their own.
static ALL_CLASSES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    std::iter::once("path")
        .chain(DEFS.roads.iter().flat_map(|def| def.classes.iter().copied()))
        .collect()
});

/// Width breakpoints shared by all road renderings. `casing_width` widens
/// the ramp from mid zooms on so casings peek out under the surface line.
fn stops(size: f64, casing_width: f64) -> Vec<Value> {
    vec![
        json!(5),
        json!(0.15 * size),
        json!(9),
        json!(0.35 * size),
        json!(12),
        json!(0.65 * size + casing_width * 0.25),
        json!(14),
        json!(1.0 * size + casing_width * 0.45),
        json!(16),
        json!(2.0 * size + casing_width * 0.75),
        json!(18),
        json!(8.0 * size + casing_width),
        json!(19),
        json!(20.0 * size + casing_width),
        json!(20),
        json!(40.0 * size + casing_width),
        json!(21),
        json!(80.0 * size + casing_width),
        json!(22),
        json!(160.0 * size + casing_width),
    ]
}

fn exp_width(stops: Vec<Value>) -> Value {
    let mut expr = vec![
        json!("interpolate"),
        json!(["exponential", 1.2]),
        json!(["zoom"]),
    ];
    expr.extend(stops);
    Value::Array(expr)
}

/// One road class being rendered into a band.
struct RoadClass<'a> {
    layer_num: i32,
    layer_filter: &'a Value,
    filter: Value,
    name: &'a str,
    color: String,
    size: f64,
    casing_scale: f64,
    casing_minzoom: Option<f64>,
}

impl RoadClass<'_> {
    fn road_stops(&self, casing_width: f64, fill: bool) -> Vec<Value> {
        stops(
            if fill { 0.0 } else { self.size },
            casing_width * self.casing_scale,
        )
    }

    /// Emits the line and polygon renderings of one casing variant.
    fn casing(
        &self,
        out: &mut Vec<Layer>,
        alt: &str,
        casing_filter: &Value,
        color: &str,
        line_cap: &str,
        stop_width: f64,
        dash: Option<Value>,
    ) {
        for (geometry_types, geometry_suffix) in [
            (json!(["LineString", "MultiLineString"]), ""),
            (json!(["Polygon", "MultiPolygon"]), "-fill"),
        ] {
            let mut paint = json!({
                "line-color": color,
                "line-width": exp_width(self.road_stops(stop_width, geometry_suffix == "-fill")),
            });
            if let Some(dash) = &dash {
                paint["line-dasharray"] = dash.clone();
            }

            out.push(Layer {
                minzoom: self.casing_minzoom,
                filter: Some(json!([
                    "all",
                    self.layer_filter,
                    self.filter,
                    casing_filter,
                    ["in", ["geometry-type"], ["literal", geometry_types]],
                    ["!=", ["get", "surface"], "unpaved"],
                ])),
                layout: Some(json!({ "line-cap": line_cap })),
                paint: Some(paint),
                ..Layer::on(
                    "transportation",
                    format!(
                        "{}-{}{}{}-casing",
                        self.name, self.layer_num, alt, geometry_suffix
                    ),
                    LayerType::Line,
                )
            });
        }
    }
}

/// Builds every road layer of one stacking band.
pub fn roads(config: &StyleConfig, layer_num: i32, layer_filter: &Value) -> Result<Vec<Layer>> {
    let mut casings = Vec::new();
    let mut surfaces = Vec::new();

    for def in DEFS.roads {
        let filter = match def.subclasses {
            Some(subclasses) => json!([
                "all",
                ["in", ["get", "class"], ["literal", def.classes]],
                ["in", ["get", "subclass"], ["literal", subclasses]],
            ]),
            None => json!(["in", ["get", "class"], ["literal", def.classes]]),
        };

        let class = RoadClass {
            layer_num,
            layer_filter,
            filter,
            name: def
                .subclasses
                .map(|subclasses| subclasses[0])
                .unwrap_or(def.classes[0]),
            color: config.pick(&def.color).to_string(),
            size: def.size,
            casing_scale: def.casing_scale,
            casing_minzoom: match def.casing_minzoom {
                Some(limit) => config.scheme(limit.dark, limit.light),
                None => Some(12.0),
            },
        };

        let mix_color = config.scheme("#ffffff", "#000000");
        let casing_color = mix(&class.color, mix_color, 0.9)?;

        class.casing(
            &mut casings,
            "",
            &json!(["!", ["has", "brunnel"]]),
            &casing_color,
            "round",
            3.0,
            None,
        );
        class.casing(
            &mut casings,
            "-bridge",
            &json!(["==", ["get", "brunnel"], "bridge"]),
            &mix(&class.color, mix_color, 0.75)?,
            "butt",
            4.0,
            None,
        );
        class.casing(
            &mut casings,
            "-tunnel",
            &json!(["==", ["get", "brunnel"], "tunnel"]),
            &config.scheme(
                mix(&class.color, "#ffffff", 0.7)?,
                mix(&class.color, "#000000", 0.8)?,
            ),
            "butt",
            4.0,
            Some(json!([0.5, 0.25])),
        );

        surfaces.push(Layer {
            minzoom: Some(5.0),
            filter: Some(json!([
                "all",
                is_linestring(),
                layer_filter,
                class.filter,
                ["==", ["get", "surface"], "unpaved"],
            ])),
            layout: Some(json!({ "line-cap": "round" })),
            paint: Some(json!({
                "line-color": casing_color,
                "line-width": exp_width(class.road_stops(def.size * 1.3, false)),
                "line-dasharray": [1.5 / 1.3, 2.0 / 1.3],
            })),
            ..Layer::on(
                "transportation",
                format!("{}-{}-unpaved-casing", class.name, layer_num),
                LayerType::Line,
            )
        });

        let surface_color = json!([
            "case",
            ["!=", ["get", "brunnel"], "tunnel"],
            class.color,
            config.scheme(
                mix(&class.color, "#ffffff", 0.85)?,
                mix(&class.color, "#ffffff", 0.7)?,
            ),
        ]);

        surfaces.push(Layer {
            minzoom: Some(5.0),
            filter: Some(json!([
                "all",
                is_linestring(),
                layer_filter,
                class.filter,
                ["!=", ["get", "surface"], "unpaved"],
            ])),
            layout: Some(json!({ "line-cap": "round" })),
            paint: Some(json!({
                "line-color": surface_color,
                "line-width": exp_width(stops(def.size, 0.0)),
            })),
            ..Layer::on(
                "transportation",
                format!("{}-{}", class.name, layer_num),
                LayerType::Line,
            )
        });

        surfaces.push(Layer {
            minzoom: Some(5.0),
            filter: Some(json!([
                "all",
                is_linestring(),
                layer_filter,
                class.filter,
                ["==", ["get", "surface"], "unpaved"],
            ])),
            layout: Some(json!({ "line-cap": "round" })),
            paint: Some(json!({
                "line-color": surface_color,
                "line-width": exp_width(stops(def.size, 0.0)),
                "line-dasharray": [1.5, 2],
            })),
            ..Layer::on(
                "transportation",
                format!("{}-{}-unpaved", class.name, layer_num),
                LayerType::Line,
            )
        });

        surfaces.push(Layer {
            filter: Some(json!(["all", is_polygon(), layer_filter, class.filter])),
            paint: Some(json!({ "fill-color": surface_color })),
            ..Layer::on(
                "transportation",
                format!("{}-{}-fill", class.name, layer_num),
                LayerType::Fill,
            )
        });
    }

    surfaces.push(Layer {
        filter: Some(json!([
            "all",
            is_linestring(),
            layer_filter,
            ["==", ["get", "class"], "path"],
            ["!=", ["get", "subclass"], "pedestrian"],
            ["!=", ["get", "subclass"], "platform"],
            ["!=", ["get", "surface"], "unpaved"],
        ])),
        paint: Some(json!({
            "line-color": config.pick(&DEFS.paths.color),
            "line-width": exp_width(stops(DEFS.paths.size, 0.0)),
        })),
        ..Layer::on("transportation", format!("path-{layer_num}"), LayerType::Line)
    });

    surfaces.push(Layer {
        filter: Some(json!([
            "all",
            is_linestring(),
            layer_filter,
            ["==", ["get", "class"], "path"],
            ["!=", ["get", "subclass"], "pedestrian"],
            ["!=", ["get", "subclass"], "platform"],
            ["==", ["get", "surface"], "unpaved"],
        ])),
        layout: Some(json!({ "line-cap": "round" })),
        paint: Some(json!({
            "line-color": config.pick(&DEFS.paths.color),
            "line-width": exp_width(stops(DEFS.paths.size, 0.0)),
            "line-dasharray": [3, 3],
        })),
        ..Layer::on(
            "transportation",
            format!("path-{layer_num}-unpaved"),
            LayerType::Line,
        )
    });

    surfaces.push(Layer {
        filter: Some(json!([
            "all",
            is_polygon(),
            layer_filter,
            ["==", ["get", "class"], "path"],
            ["==", ["get", "subclass"], "platform"],
        ])),
        paint: Some(json!({ "fill-color": config.pick(&DEFS.platforms) })),
        ..Layer::on(
            "transportation",
            format!("path-{layer_num}-platform"),
            LayerType::Fill,
        )
    });

    surfaces.push(Layer {
        filter: Some(json!([
            "all",
            is_polygon(),
            layer_filter,
            ["==", ["get", "class"], "path"],
            ["!=", ["get", "subclass"], "pedestrian"],
            ["!=", ["get", "subclass"], "platform"],
        ])),
        paint: Some(json!({ "fill-color": config.pick(&DEFS.paths.color) })),
        ..Layer::on(
            "transportation",
            format!("path-{layer_num}-fill"),
            LayerType::Fill,
        )
    });

    let oneway = Layer {
        minzoom: Some(16.0),
        filter: Some(json!([
            "all",
            layer_filter,
            is_linestring(),
            ["in", ["get", "class"], ["literal", &*ALL_CLASSES]],
            ["in", ["get", "oneway"], ["literal", [1, -1]]],
        ])),
        layout: Some(json!({
            "icon-allow-overlap": true,
            "icon-ignore-placement": true,
            "symbol-placement": "line",
            "symbol-spacing": 350,
            "icon-image": "arrow1-right-symbolic",
            "icon-rotate": ["match", ["get", "oneway"], 1, 0, 180],
            "icon-size": [
                "let",
                "base",
                [
                    "match",
                    ["get", "class"],
                    ["motorway", "trunk", "primary"],
                    0.75,
                    ["secondary", "tertiary"],
                    0.6,
                    0.5,
                ],
                [
                    "interpolate",
                    ["linear"],
                    ["zoom"],
                    14,
                    ["*", ["var", "base"], 0.75],
                    16,
                    ["*", ["var", "base"], 1.25],
                ],
            ],
        })),
        paint: Some(json!({
            "icon-color": config.pick(&DEFS.colors.oneway_arrow),
            "icon-opacity": 0.25,
        })),
        ..Layer::on(
            "transportation",
            format!("oneway-{layer_num}"),
            LayerType::Symbol,
        )
    };

    let mut layers = casings;
    layers.append(&mut surfaces);
    layers.push(oneway);
    Ok(layers)
}

/// Road name labels, placed along the line.
pub fn road_symbol(config: &StyleConfig) -> Layer {
    Layer {
        minzoom: Some(10.0),
        filter: Some(json!(["in", ["get", "class"], ["literal", &*ALL_CLASSES]])),
        layout: Some(json!({
            "text-field": config.localized_name(),
            "text-font": config.fonts("Regular"),
            "text-size": config.text_size(12.0),
            "symbol-placement": "line",
        })),
        paint: Some(json!({
            "text-color": config.pick(&DEFS.colors.foreground),
        })),
        ..Layer::on("transportation_name", "highway-name", LayerType::Symbol)
    }
}

/// Motorway junction refs, fading in with zoom.
pub fn junction_symbol(config: &StyleConfig) -> Layer {
    let zoomed_color = json!([
        "interpolate",
        ["linear"],
        ["zoom"],
        13,
        config.scheme("#deddda", "#5e5c64"),
        16,
        config.scheme("#ffffff", "#000000"),
    ]);

    Layer {
        minzoom: Some(12.0),
        filter: Some(json!([
            "all",
            ["has", "ref"],
            ["==", ["get", "subclass"], "junction"],
            ["in", ["get", "class"], ["literal", &*ALL_CLASSES]],
        ])),
        layout: Some(json!({
            "icon-image": "arrow2-top-right-symbolic",
            "text-anchor": "left",
            "text-field": ["get", "ref"],
            "text-font": config.fonts("Bold"),
            "text-size": [
                "interpolate",
                ["linear"],
                ["zoom"],
                13,
                config.text_size(8.0),
                16,
                config.text_size(12.0),
            ],
            "icon-size": [
                "interpolate",
                ["linear"],
                ["zoom"],
                13,
                config.text_size(0.5),
                16,
                config.text_size(0.75),
            ],
            "text-offset": [0.7, 0],
        })),
        paint: Some(json!({
            "icon-color": zoomed_color,
            "text-color": zoomed_color,
        })),
        ..Layer::on("transportation_name", "junction", LayerType::Symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleOptions;

    #[test]
    fn test_band_layers_embed_the_band_number() {
        let config = StyleConfig::new(&StyleOptions::default());
        let filter = crate::expr::layer_band_filter(-3);
        let layers = roads(&config, -3, &filter).unwrap();
        assert!(!layers.is_empty());
        assert!(layers.iter().all(|layer| layer.id.contains("-3")));
    }

    #[test]
    fn test_every_class_gets_casing_and_surface() {
        let config = StyleConfig::new(&StyleOptions::default());
        let filter = crate::expr::layer_band_filter(0);
        let layers = roads(&config, 0, &filter).unwrap();
        let ids: Vec<&str> = layers.iter().map(|layer| layer.id.as_str()).collect();
        assert!(ids.contains(&"motorway-0-casing"));
        assert!(ids.contains(&"motorway-0-tunnel-casing"));
        assert!(ids.contains(&"motorway-0"));
        assert!(ids.contains(&"motorway-0-unpaved"));
        assert!(ids.contains(&"motorway-0-fill"));
        assert!(ids.contains(&"path-0-platform"));
        assert!(ids.contains(&"oneway-0"));
    }

    #[test]
    fn test_service_road_casing_minzoom_differs_by_scheme() {
        let dark = StyleConfig::new(&StyleOptions {
            color_scheme: crate::ColorScheme::Dark,
            ..Default::default()
        });
        let light = StyleConfig::new(&StyleOptions::default());
        let filter = crate::expr::layer_band_filter(0);

        let find = |layers: &[Layer]| {
            layers
                .iter()
                .find(|layer| layer.id == "service-0-casing")
                .map(|layer| layer.minzoom)
                .unwrap()
        };
        assert_eq!(find(&roads(&dark, 0, &filter).unwrap()), Some(14.0));
        assert_eq!(find(&roads(&light, 0, &filter).unwrap()), None);
    }
}
