//! Administrative boundary lines.

use serde_json::json;

use crate::config::StyleConfig;
use crate::defs::DEFS;
use crate::style::{Layer, LayerType};

fn boundary_layer(config: &StyleConfig, admin_level: u8, width: f64, disputed: bool) -> Layer {
    let mut filter = vec![json!("all")];
    /* Show disputed maritime boundaries, but not undisputed ones */
    if disputed {
        filter.push(json!(["==", "disputed", 1]));
    } else {
        filter.push(json!(["!=", "disputed", 1]));
        filter.push(json!(["!=", "maritime", 1]));
    }
    filter.push(json!(["==", "admin_level", admin_level]));

    let dash: Vec<f64> = if disputed {
        vec![6.0, 54.0]
    } else {
        vec![6.0, 18.0, 18.0, 18.0]
    }
    .into_iter()
    .map(|x| x / width)
    .collect();

    Layer {
        minzoom: Some(f64::from(admin_level) - 1.0),
        filter: Some(json!(filter)),
        layout: Some(json!({
            "line-join": "round",
            "line-cap": "round",
        })),
        paint: Some(json!({
            "line-color": config.pick(&DEFS.colors.boundary),
            "line-dasharray": dash,
            "line-width": [
                "interpolate",
                ["exponential", 1.2],
                ["zoom"],
                admin_level,
                width / 5.0,
                admin_level + 14,
                width * 5.0,
            ],
        })),
        ..Layer::on(
            "boundary",
            format!(
                "boundary-{}{}",
                admin_level,
                if disputed { "-disputed" } else { "" }
            ),
            LayerType::Line,
        )
    }
}

/// One normal and one disputed layer per admin level.
pub fn boundary_layers(config: &StyleConfig) -> Vec<Layer> {
    DEFS.boundary_widths
        .iter()
        .flat_map(|&(admin_level, width)| {
            [
                boundary_layer(config, admin_level, width, false),
                boundary_layer(config, admin_level, width, true),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleOptions;

    #[test]
    fn test_pairs_per_admin_level() {
        let config = StyleConfig::new(&StyleOptions::default());
        let layers = boundary_layers(&config);
        assert_eq!(layers.len(), DEFS.boundary_widths.len() * 2);
        assert_eq!(layers[0].id, "boundary-2");
        assert_eq!(layers[1].id, "boundary-2-disputed");
    }

    #[test]
    fn test_minzoom_tracks_admin_level() {
        let config = StyleConfig::new(&StyleOptions::default());
        for layer in boundary_layers(&config) {
            let level: f64 = layer
                .id
                .trim_start_matches("boundary-")
                .trim_end_matches("-disputed")
                .parse()
                .unwrap();
            assert_eq!(layer.minzoom, Some(level - 1.0));
        }
    }

    #[test]
    fn test_dash_scales_inversely_with_width() {
        let config = StyleConfig::new(&StyleOptions::default());
        let layers = boundary_layers(&config);
        // country level: width 1.5, normal dash [6, 18, 18, 18]
        let dash = &layers[0].paint.as_ref().unwrap()["line-dasharray"];
        assert_eq!(dash, &json!([4.0, 12.0, 12.0, 12.0]));
    }
}
