//! Place name labels, one layer per tier from continents down to islands.

use serde_json::{json, Value};

use crate::config::StyleConfig;
use crate::defs::DEFS;
use crate::style::{Layer, LayerType};

pub fn places(config: &StyleConfig) -> Vec<Layer> {
    DEFS.places
        .iter()
        .map(|place| {
            let size_stops: Vec<Value> = place
                .size_stops
                .iter()
                .flat_map(|&(stop, size)| [json!(stop), json!(config.text_size(size))])
                .collect();
            let mut text_size = vec![json!("interpolate"), json!(["linear"]), json!(["zoom"])];
            text_size.extend(size_stops);

            let mut layout = json!({
                "text-font": config.fonts(place.font),
                "text-field": config.localized_name(),
            });
            if let Some(transform) = place.text_transform {
                layout["text-transform"] = json!(transform);
            }
            layout["text-padding"] = json!(10);
            layout["text-size"] = Value::Array(text_size);

            Layer {
                minzoom: place.minzoom,
                maxzoom: place.maxzoom,
                filter: Some(config.place_filter(place)),
                layout: Some(layout),
                paint: Some(json!({
                    "text-color": config.pick(&place.color),
                })),
                metadata: Some(json!({
                    "libshumate:cursor": "pointer",
                })),
                ..Layer::on(
                    "place",
                    place
                        .id
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("place-{}", place.classes[0])),
                    LayerType::Symbol,
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleOptions;

    #[test]
    fn test_one_layer_per_tier_with_unique_ids() {
        let config = StyleConfig::new(&StyleOptions::default());
        let layers = places(&config);
        assert_eq!(layers.len(), DEFS.places.len());

        let mut ids: Vec<&str> = layers.iter().map(|layer| layer.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), layers.len());
    }

    #[test]
    fn test_island_tiers_split_by_explicit_id() {
        let config = StyleConfig::new(&StyleOptions::default());
        let layers = places(&config);
        assert!(layers.iter().any(|layer| layer.id == "place-island-large"));
        assert!(layers.iter().any(|layer| layer.id == "place-island"));
    }

    #[test]
    fn test_rank_cap_wraps_the_class_filter() {
        let config = StyleConfig::new(&StyleOptions::default());
        let layers = places(&config);
        let large_islands = layers
            .iter()
            .find(|layer| layer.id == "place-island-large")
            .unwrap();
        assert_eq!(
            large_islands.filter,
            Some(json!([
                "all",
                ["<=", ["get", "rank"], 3],
                ["in", ["get", "class"], ["literal", ["island"]]]
            ]))
        );
    }

    #[test]
    fn test_uppercase_tiers_carry_the_transform() {
        let config = StyleConfig::new(&StyleOptions::default());
        let layers = places(&config);
        let state = layers
            .iter()
            .find(|layer| layer.id == "place-state")
            .unwrap();
        assert_eq!(
            state.layout.as_ref().unwrap()["text-transform"],
            json!("uppercase")
        );
    }
}
