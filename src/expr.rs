//! Shared pieces of the map-style expression language.
//!
//! Filter and paint expressions are output data, evaluated later by the
//! rendering engine; they are built as literal `serde_json` values and never
//! interpreted here.

use serde_json::{json, Value};

/// Matches point geometry.
pub fn is_point() -> Value {
    json!(["in", ["geometry-type"], ["literal", ["Point", "MultiPoint"]]])
}

/// Matches line geometry.
pub fn is_linestring() -> Value {
    json!([
        "in",
        ["geometry-type"],
        ["literal", ["LineString", "MultiLineString"]]
    ])
}

/// Matches polygon geometry.
pub fn is_polygon() -> Value {
    json!(["in", ["geometry-type"], ["literal", ["Polygon", "MultiPolygon"]]])
}

/// Filter selecting the features of one stacking band.
///
/// Band 0 also matches features carrying no `layer` tag at all, so untagged
/// ground-level geometry renders exactly once.
pub fn layer_band_filter(band: i32) -> Value {
    if band == 0 {
        json!(["any", ["==", ["get", "layer"], 0], ["!", ["has", "layer"]]])
    } else {
        json!(["==", ["get", "layer"], band])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_zero_matches_untagged_features() {
        assert_eq!(
            layer_band_filter(0),
            json!(["any", ["==", ["get", "layer"], 0], ["!", ["has", "layer"]]])
        );
    }

    #[test]
    fn test_nonzero_band_requires_tag_equality() {
        assert_eq!(layer_band_filter(-2), json!(["==", ["get", "layer"], -2]));
        assert_eq!(layer_band_filter(3), json!(["==", ["get", "layer"], 3]));
    }
}
