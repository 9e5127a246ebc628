//! Points of interest: one symbol layer whose icon, color, size and zoom
//! thresholds are all resolved by match expressions over the tag table.

use serde_json::{json, Value};

use crate::config::StyleConfig;
use crate::defs::stations::STATION_EXPRESSION;
use crate::defs::{category_color, PoiEntry, DEFS, GENERIC_POI_COLOR};
use crate::style::{Layer, LayerType};

/// Builds a two-level match expression over the tag table, applying
/// `transform` to every entry.
///
/// Branches are pruned: a subclass equal to its class fallback is dropped, a
/// class whose whole sub-table collapses to the global default is dropped,
/// and a fully degenerate match becomes the bare default value.
fn class_match<F>(transform: F, default: &Value) -> Value
where
    F: Fn(&PoiEntry) -> Option<Value>,
{
    let mut match_expr = vec![
        json!("match"),
        json!(["coalesce", ["get", "tag"], ["get", "class"]]),
    ];

    for poi_class in DEFS.pois.tags {
        let sub_default = poi_class
            .default
            .and_then(|def| transform(&PoiEntry::Def(def)))
            .unwrap_or_else(|| default.clone());

        let mut sub_match_expr = vec![
            json!("match"),
            json!(["coalesce", ["get", "subtag"], ["get", "subclass"]]),
        ];

        for (subclass, entry) in poi_class.entries {
            let value = transform(entry).unwrap_or_else(|| default.clone());
            if value != sub_default {
                sub_match_expr.push(json!(subclass));
                sub_match_expr.push(value);
            }
        }

        if sub_match_expr.len() > 2 {
            sub_match_expr.push(sub_default);
            match_expr.push(json!(poi_class.class));
            match_expr.push(Value::Array(sub_match_expr));
        } else if sub_default != *default {
            match_expr.push(json!(poi_class.class));
            match_expr.push(sub_default);
        }
    }

    match_expr.push(default.clone());
    if match_expr.len() > 3 {
        Value::Array(match_expr)
    } else {
        default.clone()
    }
}

fn sport_icon_expression() -> Value {
    let mut expr = vec![json!("match"), json!(["get", "subclass"])];
    for (subclass, icon) in DEFS.pois.sport_icons.entries {
        expr.push(json!(subclass));
        expr.push(json!(icon));
    }
    expr.push(json!(DEFS.pois.sport_icons.default));
    Value::Array(expr)
}

pub fn pois(config: &StyleConfig) -> Vec<Layer> {
    let icon = |entry: &PoiEntry| entry.def().map(|def| json!(def.icon));
    let category = |entry: &PoiEntry| {
        entry
            .def()
            .and_then(|def| def.category)
            .and_then(category_color)
            .map(|color| json!(config.pick(color)))
    };
    let minzoom = |entry: &PoiEntry| Some(json!(entry.minzoom()));
    let size = |entry: &PoiEntry| entry.def().and_then(|def| def.size).map(|s| json!(s));

    let generic = json!(config.pick(&GENERIC_POI_COLOR));
    let color = class_match(category, &generic);

    vec![Layer {
        filter: Some(json!([
            "all",
            /* For zoom levels 15-17, limit POI density by rank. At 14 and below we don't show enough
               POI types to cause a problem, and at 18 and above it's zoomed in enough to not be too dense. */
            [
                "<=",
                ["get", "rank"],
                [
                    "step",
                    ["zoom"],
                    100000,
                    15, 50,
                    17, 100,
                    18, 100000,
                ],
            ],
            [">=", ["zoom"], class_match(minzoom, &json!(16))],
            ["!=", ["get", "osm:access"], "private"],
        ])),
        layout: Some(json!({
            "text-anchor": "top",
            "text-offset": [0, 0.7],
            "text-field": ["coalesce", config.localized_name(), ["get", "ref"]],
            "text-font": config.fonts("Italic"),
            "text-size": ["*", config.text_size(12.0), class_match(size, &json!(1))],
            "text-optional": ["step", ["zoom"], false, 18, true],
            "icon-padding": 10,
            "text-padding": 10,
            "icon-image": [
                "let",
                "icon",
                class_match(icon, &json!("circle-small-symbolic")),
                [
                    "match",
                    ["var", "icon"],
                    "@sport",
                    sport_icon_expression(),
                    "@station",
                    STATION_EXPRESSION.clone(),
                    ["var", "icon"],
                ],
            ],
            "icon-size": class_match(size, &json!(1)),
            "symbol-sort-key": [
                "+",
                ["*", class_match(minzoom, &json!(16)), 1000000],
                ["get", "rank"],
            ],
        })),
        paint: Some(json!({
            "icon-color": color,
            "text-color": color,
        })),
        metadata: Some(json!({
            "libshumate:cursor": "pointer",
        })),
        ..Layer::on("poi", "pois", LayerType::Symbol)
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleOptions;

    /// Extracts the `class → value` branch pairs of an outer match.
    fn branches(expr: &Value) -> Vec<(&Value, &Value)> {
        let parts = expr.as_array().unwrap();
        parts[2..parts.len() - 1]
            .chunks(2)
            .map(|pair| (&pair[0], &pair[1]))
            .collect()
    }

    #[test]
    fn test_degenerate_match_collapses_to_default() {
        let expr = class_match(|_| Some(json!("x")), &json!("x"));
        assert_eq!(expr, json!("x"));
    }

    #[test]
    fn test_uniform_class_collapses_to_one_branch() {
        // every information subclass resolves to the class fallback icon
        let expr = class_match(
            |entry| entry.def().map(|def| json!(def.icon)),
            &json!("circle-small-symbolic"),
        );
        let (_, value) = branches(&expr)
            .into_iter()
            .find(|(class, _)| *class == &json!("information"))
            .unwrap();
        assert_eq!(value, &json!("explore-symbolic"));
    }

    #[test]
    fn test_distinct_subclasses_keep_a_nested_match() {
        let expr = class_match(
            |entry| entry.def().map(|def| json!(def.icon)),
            &json!("circle-small-symbolic"),
        );
        let (_, value) = branches(&expr)
            .into_iter()
            .find(|(class, _)| *class == &json!("amenity"))
            .unwrap();
        let nested = value.as_array().unwrap();
        assert_eq!(nested[0], json!("match"));
        assert_eq!(
            nested[1],
            json!(["coalesce", ["get", "subtag"], ["get", "subclass"]])
        );
    }

    #[test]
    fn test_hidden_entries_get_an_unreachable_minzoom() {
        let expr = class_match(|entry| Some(json!(entry.minzoom())), &json!(16));
        let (_, value) = branches(&expr)
            .into_iter()
            .find(|(class, _)| *class == &json!("barrier"))
            .unwrap();
        let nested = value.as_array().unwrap();
        let bollard = nested.iter().position(|v| v == &json!("bollard")).unwrap();
        assert_eq!(nested[bollard + 1], json!(100));
    }

    #[test]
    fn test_single_poi_layer_with_station_expansion() {
        let config = StyleConfig::new(&StyleOptions::default());
        let layers = pois(&config);
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].id, "pois");

        let icon_image = &layers[0].layout.as_ref().unwrap()["icon-image"];
        let text = serde_json::to_string(icon_image).unwrap();
        assert!(text.contains("@sport"));
        assert!(text.contains("@station"));
        assert!(text.contains("osm:network:wikidata"));
    }
}
