//! Exports the map style to JSON files for use in MapLibre GL.

use std::fs;
use std::path::Path;

use anyhow::Context;
use mapstyle::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "dist".to_string());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {out_dir}"))?;

    for color_scheme in [ColorScheme::Dark, ColorScheme::Light] {
        let options = StyleOptions {
            color_scheme,
            renderer: Renderer::MaplibreGlJs,
            text_scale: 1.0,
            ..Default::default()
        };
        let style = generate_map_style(&options)
            .with_context(|| format!("failed to generate the {color_scheme} style"))?;

        let path = Path::new(&out_dir).join(format!("gnome-maps-{color_scheme}.json"));
        println!("Writing {}", path.display());
        let json = serde_json::to_string_pretty(&style)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
