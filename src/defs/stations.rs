//! Station icon mappings.
//!
//! Icons are keyed by transit-network Wikidata tag, then POI class, then POI
//! subclass (e.g. `subway`, `tram_stop`, `station`, `light_rail`), with a
//! catch-all default at every level. Unmatched lookups fall through to the
//! network-independent defaults.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Subclass→icon entries of one POI class, plus the class-wide fallback.
#[derive(Debug, Clone, Copy)]
pub struct StationClass {
    pub class: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
    pub default: Option<&'static str>,
}

/// Icon mappings of one transit network.
#[derive(Debug, Clone, Copy)]
pub struct StationNetwork {
    /// Network Wikidata tag
    pub network: &'static str,
    pub classes: &'static [StationClass],
    /// Catch-all icon when no class matches
    pub default: Option<&'static str>,
}

const fn railway(entries: &'static [(&'static str, &'static str)]) -> StationClass {
    StationClass {
        class: "railway",
        entries,
        default: None,
    }
}

const fn railway_all(icon: &'static str) -> StationClass {
    StationClass {
        class: "railway",
        entries: &[],
        default: Some(icon),
    }
}

const fn net(network: &'static str, classes: &'static [StationClass]) -> StationNetwork {
    StationNetwork {
        network,
        classes,
        default: None,
    }
}

// generic definition for German networks (U-Bahn and S-Bahn)
const DE_U_S_BAHN: &[StationClass] = &[railway(&[
    ("light_rail", "s-bahn"),
    ("station", "s-bahn"),
    ("subway", "u-bahn"),
])];

// generic definition for (some) Italian metro networks
const IT_METRO: &[StationClass] = &[railway(&[("subway", "italy-m")])];

// generic definition for South Korean metro networks
const KR_METRO: &[StationClass] = &[railway(&[("subway", "south-korea-m")])];

/// Network-independent fallback icons.
pub static DEFAULT_NETWORK: StationNetwork = StationNetwork {
    network: "_",
    classes: &[StationClass {
        class: "railway",
        entries: &[
            ("funicular", "funicular-symbolic"),
            ("light_rail", "tram-symbolic"),
            ("monorail", "monorail-symbolic"),
            ("station", "train-symbolic"),
            ("subway", "subway-symbolic"),
            ("tram_stop", "tram-symbolic"),
        ],
        default: Some("train-symbolic"),
    }],
    default: Some("train-symbolic"),
};

/// Network-specific icon mappings, keyed by Wikidata tag.
pub static NETWORKS: &[StationNetwork] = &[
    // BART (San Francisco Bay Area)
    net("Q610120", &[railway(&[("subway", "bart")])]),
    // Berlin (VBB)
    net("Q315451", DE_U_S_BAHN),
    // Boston (MTBA)
    net("Q171985", &[railway_all("boston-t")]),
    // Metropolitana di Brescia
    net("Q3644334", IT_METRO),
    // Brussels (STIB)
    net("Q114957008", &[railway(&[("subway", "brussels-m")])]),
    // Busan Metro
    net("Q51972", &[railway(&[("subway", "south-korea-m")])]),
    // Metropolitana di Catania
    net("Q239927", &[railway(&[("subway", "catania-m")])]),
    // Copenhagen Metro
    net("Q212741", &[railway(&[("subway", "copenhagen-m")])]),
    // Daegu Subway
    net("Q49458", KR_METRO),
    // Daejeon Metro
    net("Q624200", KR_METRO),
    // Frankfurt (RMV)
    net("Q314042", DE_U_S_BAHN),
    // Metropolitana di Genova
    net("Q295335", IT_METRO),
    // Glasgow subway
    net("Q506290", &[railway(&[("subway", "glasgow-s")])]),
    // Gwangju Metro
    net("Q495335", KR_METRO),
    // Hamburg (HVV)
    net("Q896916", DE_U_S_BAHN),
    // Helsingin metro
    net("Q473211", &[railway(&[("subway", "helsinki-m")])]),
    // Hong Kong MTR
    net("Q14751", &[railway_all("hongkong-mtr")]),
    // Great Britain National Rail
    net("Q26334", &[railway_all("gb-national-rail")]),
    // Incheon Metro
    net("Q483883", KR_METRO),
    // Kiyv Metro
    net("Q215871", &[railway(&[("subway", "kiyv-m")])]),
    // London DLR
    net("Q216360", &[railway(&[("light_rail", "london-dlr")])]),
    // London Elizabeth Line
    net("Q111297173", &[railway(&[("station", "london-elizabeth-line")])]),
    // London Overground
    net("Q746021", &[railway(&[("station", "london-overground")])]),
    // London Tramlink
    net("Q786032", &[railway(&[("tram_stop", "london-trams")])]),
    // London Underground
    net("Q20075", &[railway(&[("subway", "london-underground")])]),
    // Madrid (Metro)
    net("Q191987", &[railway(&[("subway", "madrid-metro")])]),
    // Madrid (Commuter rail)
    net("Q1054785", &[railway(&[("station", "madrid-c")])]),
    // Metropolitana di Milano
    net("Q65125405", IT_METRO),
    // München
    net("Q259000", DE_U_S_BAHN),
    // Metropolitana di Napoli
    net("Q747184", IT_METRO),
    // Nürnberg
    net("Q2516463", DE_U_S_BAHN),
    // NYC Subway
    net("Q7733", &[railway(&[("subway", "nyc-mta")])]),
    // Oslo T-bane
    net("Q750292", &[railway(&[("subway", "oslo-t")])]),
    // Philadelphia (SEPTA)
    net("Q2037863", &[railway_all("septa")]),
    // Prague Metro
    net("Q190271", &[railway(&[("subway", "prague-m")])]),
    // Metropolitana di Roma
    net("Q530087", IT_METRO),
    // Metro de Santiago
    net("Q913314", &[railway(&[("subway", "santiago-metro")])]),
    // Seoul Metro
    net("Q16950", KR_METRO),
    // Sofia Metro
    net("Q124360139", &[railway(&[("subway", "sofia-m")])]),
    // Stockholm T-bana
    net("Q970452", &[railway(&[("subway", "stockholm-t")])]),
    // Sydney Metro
    net("Q14774571", &[railway_all("sydney-m")]),
    // Sydney Trains
    net("Q7660181", &[railway_all("sydney-t")]),
    // Tbilisi Metro
    net("Q37006", &[railway(&[("subway", "tbilisi-m")])]),
    // Metropolitana di Torino
    net("Q135001237", IT_METRO),
    // Vienna (U-Bahn)
    net("Q209400", &[railway(&[("subway", "wien-u")])]),
    // Yerevan Metro
    net("Q320337", &[railway(&[("subway", "yerevan-metro")])]),
];

fn lookup(network: &StationNetwork, class: &str, subclass: &str) -> Option<&'static str> {
    network
        .classes
        .iter()
        .find(|c| c.class == class)
        .and_then(|c| {
            c.entries
                .iter()
                .find(|(name, _)| *name == subclass)
                .map(|(_, icon)| *icon)
                .or(c.default)
        })
        .or(network.default)
}

/// Resolves the station icon for a network/class/subclass triple.
///
/// Unmatched lookups at any level fall through to the network-independent
/// defaults.
pub fn station_icon(network: &str, class: &str, subclass: &str) -> &'static str {
    NETWORKS
        .iter()
        .find(|n| n.network == network)
        .and_then(|n| lookup(n, class, subclass))
        .or_else(|| lookup(&DEFAULT_NETWORK, class, subclass))
        .unwrap_or("train-symbolic")
}

fn class_expression(class: &StationClass) -> Value {
    let default = class.default.map(Value::from).unwrap_or(Value::Null);
    if class.entries.is_empty() {
        return default;
    }

    let mut expr = vec![json!("match"), json!(["get", "subclass"])];
    for (subclass, icon) in class.entries {
        expr.push(json!(subclass));
        expr.push(json!(icon));
    }
    expr.push(default);
    Value::Array(expr)
}

fn network_expression(network: &StationNetwork) -> Value {
    let default = network.default.map(Value::from).unwrap_or(Value::Null);
    if network.classes.is_empty() {
        return default;
    }

    let mut expr = vec![json!("match"), json!(["get", "class"])];
    for class in network.classes {
        expr.push(json!(class.class));
        expr.push(class_expression(class));
    }
    expr.push(default);
    Value::Array(expr)
}

/// The icon-selection expression over the whole table, keyed on the
/// feature's `osm:network:wikidata` tag.
///
/// Network branches without a match produce `null`, so the surrounding
/// `coalesce` falls through to the network-independent expression.
pub static STATION_EXPRESSION: Lazy<Value> = Lazy::new(|| {
    let mut by_network = vec![json!("match"), json!(["get", "osm:network:wikidata"])];
    for network in NETWORKS {
        by_network.push(json!(network.network));
        by_network.push(network_expression(network));
    }
    by_network.push(Value::Null);

    json!([
        "coalesce",
        Value::Array(by_network),
        network_expression(&DEFAULT_NETWORK)
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_specific_icon() {
        assert_eq!(station_icon("Q7733", "railway", "subway"), "nyc-mta");
        assert_eq!(station_icon("Q315451", "railway", "subway"), "u-bahn");
        assert_eq!(station_icon("Q315451", "railway", "station"), "s-bahn");
    }

    #[test]
    fn test_class_catch_all() {
        // Boston maps every railway subclass to the same icon
        assert_eq!(station_icon("Q171985", "railway", "subway"), "boston-t");
        assert_eq!(station_icon("Q171985", "railway", "tram_stop"), "boston-t");
    }

    #[test]
    fn test_unmatched_subclass_falls_back_to_defaults() {
        // NYC only defines subway; a tram stop uses the generic icon
        assert_eq!(station_icon("Q7733", "railway", "tram_stop"), "tram-symbolic");
    }

    #[test]
    fn test_unknown_network_uses_defaults() {
        assert_eq!(station_icon("Q0", "railway", "subway"), "subway-symbolic");
        assert_eq!(station_icon("Q0", "railway", "siding"), "train-symbolic");
        assert_eq!(station_icon("Q0", "monorail", "station"), "train-symbolic");
    }

    #[test]
    fn test_expression_shape() {
        let expr = &*STATION_EXPRESSION;
        let parts = expr.as_array().unwrap();
        assert_eq!(parts[0], json!("coalesce"));
        let by_network = parts[1].as_array().unwrap();
        assert_eq!(by_network[0], json!("match"));
        assert_eq!(by_network[1], json!(["get", "osm:network:wikidata"]));
        // trailing null lets unmatched networks fall through the coalesce
        assert_eq!(by_network[by_network.len() - 1], Value::Null);
    }
}
