//! Style generation configuration.
//!
//! [`StyleOptions`] is the caller-facing parameter set; [`StyleConfig`] is
//! the resolved form every layer builder consumes. All helpers are pure so
//! generation stays deterministic for a given option set.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use crate::defs::{ColorDef, PlaceDef};

/// Color scheme the generated style targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

/// Renderer the generated style targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Renderer {
    #[default]
    #[serde(rename = "libshumate")]
    Libshumate,
    #[serde(rename = "maplibre-gl-js")]
    MaplibreGlJs,
}

/// Options accepted by [`crate::generate_map_style`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Color scheme
    pub color_scheme: ColorScheme,
    /// Renderer to target
    pub renderer: Renderer,
    /// Text scale factor
    pub text_scale: f64,
    /// Language code for localized labels
    pub language: Option<String>,
    /// Tile URL template overriding the default tile server
    pub tile_url: Option<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            renderer: Renderer::default(),
            text_scale: 1.0,
            language: None,
            tile_url: None,
        }
    }
}

/// Resolved configuration shared by all layer builders.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    pub color_scheme: ColorScheme,
    pub renderer: Renderer,
    pub text_scale: f64,
    pub language: Option<String>,
}

impl StyleConfig {
    pub fn new(options: &StyleOptions) -> Self {
        Self {
            color_scheme: options.color_scheme,
            renderer: options.renderer,
            text_scale: options.text_scale,
            language: options.language.clone(),
        }
    }

    /// Resolves a color definition to the hex string for the active scheme.
    ///
    /// Scalars pass through unchanged.
    pub fn pick<'a>(&self, def: &'a ColorDef) -> &'a str {
        match *def {
            ColorDef::Scalar(color) => color,
            ColorDef::Pair { dark, light } => {
                if self.color_scheme.is_dark() {
                    dark
                } else {
                    light
                }
            }
        }
    }

    /// Selects the scheme-appropriate value from an arbitrary pair.
    pub fn scheme<T>(&self, dark: T, light: T) -> T {
        if self.color_scheme.is_dark() {
            dark
        } else {
            light
        }
    }

    /// Builds a categorical color-selection `match` expression over `field`
    /// (default `class`), with `fallback` as the default branch.
    ///
    /// A key containing spaces maps several raw values onto one color.
    pub fn color_match(
        &self,
        table: &[(&str, ColorDef)],
        fallback: &ColorDef,
        field: Option<&str>,
    ) -> Value {
        let mut result = vec![json!("match"), json!(["get", field.unwrap_or("class")])];
        for (key, value) in table {
            if key.contains(' ') {
                result.push(json!(key.split(' ').collect::<Vec<_>>()));
            } else {
                result.push(json!(key));
            }
            result.push(json!(self.pick(value)));
        }
        result.push(json!(self.pick(fallback)));
        Value::Array(result)
    }

    /// Font stack for the given variant.
    pub fn fonts(&self, variant: &str) -> Value {
        match self.renderer {
            Renderer::Libshumate => json!([format!("Adwaita Sans {variant}")]),
            /* Use Noto Sans when targeting MapLibre GL JS because it's
               more commonly available in SDF format. */
            Renderer::MaplibreGlJs => json!([format!("Noto Sans {variant}")]),
        }
    }

    /// Scales a text size by the configured text scale factor.
    pub fn text_size(&self, size: f64) -> f64 {
        size * self.text_scale
    }

    /// Label text expression resolving the best available localized name.
    pub fn localized_name(&self) -> Value {
        let locale_expr = match self.language.as_deref() {
            /* Fallback for exporting the style as JSON. */
            None => json!([
                "get",
                [
                    "concat",
                    "name:",
                    ["slice", ["resolved-locale", ["collator", {}]], 0, 2]
                ]
            ]),
            /* special case for Norwegian (Bokmål "nb" and nynorsk "nn") with the
               fallback language code "no" for names with a common translation:
               https://wiki.openstreetmap.org/wiki/Multilingual_names#Norway */
            Some(language @ ("nb" | "nn")) => json!([
                "coalesce",
                ["get", format!("name:{language}")],
                ["get", "name:no"]
            ]),
            Some(language) => {
                let primary = language.split('-').next().unwrap_or(language);
                json!(["get", format!("name:{primary}")])
            }
        };

        json!(["to-string", ["coalesce", locale_expr, ["get", "name"]]])
    }

    /// Filter for one place label tier: class membership, optionally capped
    /// by feature rank.
    pub fn place_filter(&self, place: &PlaceDef) -> Value {
        let class_expression = json!(["in", ["get", "class"], ["literal", place.classes]]);

        match place.max_rank {
            Some(max_rank) => json!(["all", ["<=", ["get", "rank"], max_rank], class_expression]),
            None => class_expression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::DEFS;

    fn config(scheme: ColorScheme) -> StyleConfig {
        StyleConfig::new(&StyleOptions {
            color_scheme: scheme,
            ..Default::default()
        })
    }

    #[test]
    fn test_pick_resolves_pairs_for_both_schemes() {
        let pair = ColorDef::Pair {
            dark: "#191a19",
            light: "#deddda",
        };
        assert_eq!(config(ColorScheme::Dark).pick(&pair), "#191a19");
        assert_eq!(config(ColorScheme::Light).pick(&pair), "#deddda");
    }

    #[test]
    fn test_pick_passes_scalars_through() {
        let scalar = ColorDef::Scalar("transparent");
        assert_eq!(config(ColorScheme::Dark).pick(&scalar), "transparent");
    }

    #[test]
    fn test_pick_is_total_over_the_catalogue() {
        for cfg in [config(ColorScheme::Dark), config(ColorScheme::Light)] {
            for (_, color) in DEFS.landcover {
                assert!(cfg.pick(color).starts_with('#'));
            }
            assert!(cfg.pick(&DEFS.colors.background).starts_with('#'));
            assert!(cfg.pick(&DEFS.buildings).starts_with('#'));
        }
    }

    #[test]
    fn test_color_match_splits_space_separated_keys() {
        let table = [(
            "river lake",
            ColorDef::Pair {
                dark: "#0f2f5e",
                light: "#99c1f1",
            },
        )];
        let expr = config(ColorScheme::Light).color_match(
            &table,
            &ColorDef::Scalar("transparent"),
            None,
        );
        assert_eq!(
            expr,
            json!(["match", ["get", "class"], ["river", "lake"], "#99c1f1", "transparent"])
        );
    }

    #[test]
    fn test_fonts_depend_on_renderer() {
        let mut cfg = config(ColorScheme::Light);
        assert_eq!(cfg.fonts("Regular"), json!(["Adwaita Sans Regular"]));
        cfg.renderer = Renderer::MaplibreGlJs;
        assert_eq!(cfg.fonts("Bold"), json!(["Noto Sans Bold"]));
    }

    #[test]
    fn test_text_size_scales() {
        let cfg = StyleConfig::new(&StyleOptions {
            text_scale: 1.5,
            ..Default::default()
        });
        assert_eq!(cfg.text_size(12.0), 18.0);
    }

    #[test]
    fn test_localized_name_norwegian_fallback_chain() {
        let cfg = StyleConfig::new(&StyleOptions {
            language: Some("nb".to_string()),
            ..Default::default()
        });
        assert_eq!(
            cfg.localized_name(),
            json!([
                "to-string",
                [
                    "coalesce",
                    ["coalesce", ["get", "name:nb"], ["get", "name:no"]],
                    ["get", "name"]
                ]
            ])
        );
    }

    #[test]
    fn test_localized_name_truncates_to_primary_subtag() {
        let cfg = StyleConfig::new(&StyleOptions {
            language: Some("fr-FR".to_string()),
            ..Default::default()
        });
        assert_eq!(
            cfg.localized_name(),
            json!(["to-string", ["coalesce", ["get", "name:fr"], ["get", "name"]]])
        );
    }

    #[test]
    fn test_localized_name_without_language_resolves_at_render_time() {
        let expr = config(ColorScheme::Light).localized_name();
        assert_eq!(
            expr,
            json!([
                "to-string",
                [
                    "coalesce",
                    [
                        "get",
                        [
                            "concat",
                            "name:",
                            ["slice", ["resolved-locale", ["collator", {}]], 0, 2]
                        ]
                    ],
                    ["get", "name"]
                ]
            ])
        );
    }
}
