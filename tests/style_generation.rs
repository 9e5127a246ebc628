//! Whole-document properties of the generated style.
//!
//! Layer order is visual stacking order, so several tests assert exact
//! positions rather than set membership.

use std::collections::HashSet;

use mapstyle::prelude::*;
use mapstyle::style::DEFAULT_TILE_URL;

fn options(color_scheme: ColorScheme, renderer: Renderer) -> StyleOptions {
    StyleOptions {
        color_scheme,
        renderer,
        text_scale: 1.0,
        ..Default::default()
    }
}

fn generate(color_scheme: ColorScheme, renderer: Renderer) -> StyleDocument {
    generate_map_style(&options(color_scheme, renderer)).unwrap()
}

fn index_of(style: &StyleDocument, id: &str) -> usize {
    style
        .layers
        .iter()
        .position(|layer| layer.id == id)
        .unwrap_or_else(|| panic!("layer {id} missing"))
}

#[test]
fn test_generation_is_deterministic() {
    for color_scheme in [ColorScheme::Dark, ColorScheme::Light] {
        for renderer in [Renderer::Libshumate, Renderer::MaplibreGlJs] {
            let first = generate(color_scheme, renderer);
            let second = generate(color_scheme, renderer);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_layer_ids_are_unique() {
    for renderer in [Renderer::Libshumate, Renderer::MaplibreGlJs] {
        let style = generate(ColorScheme::Dark, renderer);
        let mut seen = HashSet::new();
        for layer in &style.layers {
            assert!(seen.insert(&layer.id), "duplicate layer id {}", layer.id);
        }
    }
}

#[test]
fn test_dark_maplibre_scenario() {
    let style = generate(ColorScheme::Dark, Renderer::MaplibreGlJs);

    assert_eq!(style.version, 8);
    assert_eq!(style.name, "GNOME Maps Dark");
    assert_eq!(style.sources.vector_tiles.source_type, "vector");
    assert_eq!(style.sources.vector_tiles.tiles, vec![DEFAULT_TILE_URL]);
    assert_eq!(style.sources.vector_tiles.minzoom, 0);
    assert_eq!(style.sources.vector_tiles.maxzoom, 14);
    assert!(style.glyphs.contains("{fontstack}"));

    let background = &style.layers[0];
    assert_eq!(background.id, "background");
    assert_eq!(background.layer_type, LayerType::Background);
    assert_eq!(
        background.paint.as_ref().unwrap()["background-color"],
        serde_json::json!("#191a19")
    );

    assert_eq!(
        generate(ColorScheme::Light, Renderer::MaplibreGlJs).name,
        "GNOME Maps Light"
    );
}

#[test]
fn test_tile_url_override() {
    let style = generate_map_style(&StyleOptions {
        tile_url: Some("https://tiles.example.com/{z}/{x}/{y}.pbf".to_string()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        style.sources.vector_tiles.tiles,
        vec!["https://tiles.example.com/{z}/{x}/{y}.pbf"]
    );
}

#[test]
fn test_every_band_renders_roads_rail_and_aerial() {
    let style = generate(ColorScheme::Light, Renderer::MaplibreGlJs);
    for band in -5..=5 {
        assert!(index_of(&style, &format!("motorway-{band}")) > 0);
        assert!(index_of(&style, &format!("motorway-{band}-casing")) > 0);
        assert!(index_of(&style, &format!("path-{band}")) > 0);
        assert!(index_of(&style, &format!("oneway-{band}")) > 0);
        assert!(index_of(&style, &format!("light-rail-{band}")) > 0);
        assert!(index_of(&style, &format!("heavy-rail-{band}")) > 0);
        assert!(index_of(&style, &format!("cable-car-{band}")) > 0);
        assert!(index_of(&style, &format!("lift-{band}")) > 0);
    }
}

#[test]
fn test_bands_render_in_stacking_order() {
    let style = generate(ColorScheme::Light, Renderer::MaplibreGlJs);
    for band in -5..5 {
        assert!(
            index_of(&style, &format!("motorway-{band}"))
                < index_of(&style, &format!("motorway-{}", band + 1)),
            "band {band} should draw under band {}",
            band + 1
        );
    }
}

#[test]
fn test_airports_and_buildings_only_in_ground_band() {
    let style = generate(ColorScheme::Light, Renderer::MaplibreGlJs);
    // exactly one of each, between band -1 and band 1 roads
    assert_eq!(
        style.layers.iter().filter(|l| l.id == "buildings").count(),
        1
    );
    assert_eq!(
        style.layers.iter().filter(|l| l.id == "runway-fill").count(),
        1
    );
    assert!(index_of(&style, "motorway-0") < index_of(&style, "runway-fill"));
    assert!(index_of(&style, "buildings") < index_of(&style, "motorway-1"));
}

#[test]
fn test_shield_layer_follows_the_renderer() {
    let libshumate = generate(ColorScheme::Light, Renderer::Libshumate);
    let shield = index_of(&libshumate, "highway-shield");
    assert!(index_of(&libshumate, "junction") < shield);
    assert!(shield < index_of(&libshumate, "aerial-labels"));

    let maplibre = generate(ColorScheme::Light, Renderer::MaplibreGlJs);
    assert!(!maplibre
        .layers
        .iter()
        .any(|layer| layer.id.contains("shield")));
}

#[test]
fn test_base_layer_order_is_exact() {
    let style = generate(ColorScheme::Dark, Renderer::MaplibreGlJs);
    let head: Vec<&str> = style.layers[..5]
        .iter()
        .map(|layer| layer.id.as_str())
        .collect();
    assert_eq!(
        head,
        ["background", "landcover", "landuse", "water-fill", "water-line"]
    );

    // boundaries come right after the base fills, one pair per admin level
    let mut expected = 5;
    for admin_level in 2..=8 {
        assert_eq!(index_of(&style, &format!("boundary-{admin_level}")), expected);
        assert_eq!(
            index_of(&style, &format!("boundary-{admin_level}-disputed")),
            expected + 1
        );
        expected += 2;
    }
}

#[test]
fn test_label_layer_order_is_exact() {
    let style = generate(ColorScheme::Dark, Renderer::MaplibreGlJs);
    let ferry = index_of(&style, "ferry-line");
    let tail: Vec<String> = style.layers[ferry..]
        .iter()
        .map(|layer| layer.id.clone())
        .collect();

    let mut expected: Vec<String> = [
        "ferry-line",
        "water-name",
        "water-name-line",
        "waterway-name",
        "ferry-line-name",
        "housenumbers",
        "pois",
        "highway-name",
        "junction",
        "aerial-labels",
        "airport-symbols",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    expected.extend(DEFS.places.iter().map(|place| {
        place
            .id
            .map(str::to_string)
            .unwrap_or_else(|| format!("place-{}", place.classes[0]))
    }));
    assert_eq!(tail, expected);
}

#[test]
fn test_fills_precede_labels() {
    let style = generate(ColorScheme::Light, Renderer::MaplibreGlJs);

    let last_fill = style
        .layers
        .iter()
        .rposition(|layer| layer.layer_type == LayerType::Fill)
        .unwrap();
    let first_place_label = index_of(&style, "place-continent");
    assert!(last_fill < first_place_label);

    // every transportation fill draws under every transportation_name label
    let last_road_fill = style
        .layers
        .iter()
        .rposition(|layer| {
            layer.layer_type == LayerType::Fill
                && layer.source_layer.as_deref() == Some("transportation")
        })
        .unwrap();
    let first_road_label = style
        .layers
        .iter()
        .position(|layer| {
            layer.layer_type == LayerType::Symbol
                && layer.source_layer.as_deref() == Some("transportation_name")
        })
        .unwrap();
    assert!(last_road_fill < first_road_label);
}

#[test]
fn test_schemes_disagree_on_palette_but_not_structure() {
    let dark = generate(ColorScheme::Dark, Renderer::MaplibreGlJs);
    let light = generate(ColorScheme::Light, Renderer::MaplibreGlJs);

    let ids = |style: &StyleDocument| -> Vec<String> {
        style.layers.iter().map(|layer| layer.id.clone()).collect()
    };
    assert_eq!(ids(&dark), ids(&light));

    assert_ne!(
        dark.layers[0].paint.as_ref().unwrap()["background-color"],
        light.layers[0].paint.as_ref().unwrap()["background-color"]
    );
}

#[test]
fn test_document_serializes_with_wire_field_names() {
    let style = generate(ColorScheme::Dark, Renderer::MaplibreGlJs);
    let value = serde_json::to_value(&style).unwrap();

    assert_eq!(value["version"], serde_json::json!(8));
    assert_eq!(value["sources"]["vector-tiles"]["type"], "vector");

    let water_fill = &value["layers"][3];
    assert_eq!(water_fill["id"], "water-fill");
    assert_eq!(water_fill["type"], "fill");
    assert_eq!(water_fill["source"], "vector-tiles");
    assert_eq!(water_fill["source-layer"], "water");
    // optional fields are omitted, not serialized as null
    assert!(water_fill.get("minzoom").is_none());
    assert!(value["layers"][0].get("source").is_none());
}

#[test]
fn test_round_trips_through_json() {
    let style = generate(ColorScheme::Light, Renderer::Libshumate);
    let json = serde_json::to_string_pretty(&style).unwrap();
    let parsed: StyleDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(style, parsed);
}
