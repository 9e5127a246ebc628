//! The static style catalogue: palettes, category definitions and
//! icon/zoom/color mappings consumed by every layer builder.
//!
//! Everything here is `'static` data constructed at compile time and never
//! mutated. Tables that feed `match` expressions are ordered slices rather
//! than maps, so generated expressions are deterministic and stable.

pub mod stations;

/// A color, either shared between schemes or defined per scheme.
///
/// Resolution via [`crate::StyleConfig::pick`] always terminates in a single
/// scalar string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDef {
    Scalar(&'static str),
    Pair {
        dark: &'static str,
        light: &'static str,
    },
}

const fn pair(dark: &'static str, light: &'static str) -> ColorDef {
    ColorDef::Pair { dark, light }
}

/// Category color for POIs without a more specific category.
pub const GENERIC_POI_COLOR: ColorDef = pair("#00bebe", "#007f7f");

/// Scheme-wide base colors.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: ColorDef,
    pub foreground: ColorDef,
    pub water: ColorDef,
    pub boundary: ColorDef,
    pub oneway_arrow: ColorDef,
}

/// Airport-specific colors.
#[derive(Debug, Clone, Copy)]
pub struct AirportDef {
    pub symbol_color: ColorDef,
    pub runway_color: ColorDef,
}

/// One place label tier.
#[derive(Debug, Clone, Copy)]
pub struct PlaceDef {
    /// Explicit layer id; defaults to `place-<first class>`
    pub id: Option<&'static str>,
    pub classes: &'static [&'static str],
    /// Font variant
    pub font: &'static str,
    pub color: ColorDef,
    pub minzoom: Option<f64>,
    pub maxzoom: Option<f64>,
    /// Only label features up to this rank
    pub max_rank: Option<u32>,
    pub text_transform: Option<&'static str>,
    /// `(zoom, text size)` breakpoints, interpolated linearly
    pub size_stops: &'static [(u8, f64)],
}

/// One road class definition.
#[derive(Debug, Clone, Copy)]
pub struct RoadDef {
    pub classes: &'static [&'static str],
    pub subclasses: Option<&'static [&'static str]>,
    pub color: ColorDef,
    /// Width multiplier relative to a generic road
    pub size: f64,
    /// Per-scheme casing min zoom; `None` on a scheme omits the limit,
    /// absent entirely means casing from zoom 12
    pub casing_minzoom: Option<CasingMinZoom>,
    pub casing_scale: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct CasingMinZoom {
    pub dark: Option<f64>,
    pub light: Option<f64>,
}

/// Line color and width factor for generic paths.
#[derive(Debug, Clone, Copy)]
pub struct PathDef {
    pub color: ColorDef,
    pub size: f64,
}

/// One POI subclass entry: icon, category color ref, min zoom and icon size.
#[derive(Debug, Clone, Copy)]
pub struct PoiDef {
    /// Icon name; `@sport` and `@station` trigger secondary lookups
    pub icon: &'static str,
    pub category: Option<&'static str>,
    /// Defaults to 15 when absent
    pub minzoom: Option<i64>,
    pub size: Option<f64>,
}

/// A POI table entry; `Hidden` suppresses the subclass entirely.
#[derive(Debug, Clone, Copy)]
pub enum PoiEntry {
    Def(PoiDef),
    Hidden,
}

impl PoiEntry {
    pub fn def(&self) -> Option<&PoiDef> {
        match self {
            PoiEntry::Def(def) => Some(def),
            PoiEntry::Hidden => None,
        }
    }

    /// Min zoom for the filter expression; hidden entries never show.
    pub fn minzoom(&self) -> i64 {
        match self {
            PoiEntry::Def(def) => def.minzoom.unwrap_or(15),
            PoiEntry::Hidden => 100,
        }
    }
}

/// All subclass entries of one POI class, with the class-wide fallback.
#[derive(Debug, Clone, Copy)]
pub struct PoiClass {
    pub class: &'static str,
    pub entries: &'static [(&'static str, PoiEntry)],
    /// Fallback for subclasses without an entry of their own
    pub default: Option<PoiDef>,
}

/// Sport-specific icons, keyed by subclass.
#[derive(Debug, Clone, Copy)]
pub struct SportIcons {
    pub entries: &'static [(&'static str, &'static str)],
    pub default: &'static str,
}

/// The POI catalogue: category colors, sport icons and the tag table.
#[derive(Debug, Clone, Copy)]
pub struct PoiDefs {
    pub colors: &'static [(&'static str, ColorDef)],
    pub sport_icons: SportIcons,
    pub tags: &'static [PoiClass],
}

/// The complete style catalogue.
#[derive(Debug, Clone, Copy)]
pub struct Defs {
    /// Lowest stacking band rendered
    pub min_layer: i32,
    /// Highest stacking band rendered
    pub max_layer: i32,
    pub airports: AirportDef,
    pub buildings: ColorDef,
    pub colors: Palette,
    /// Admin level → line width constant. See
    /// <https://wiki.openstreetmap.org/wiki/Tag:boundary%253Dadministrative>
    /// for more information on admin levels.
    pub boundary_widths: &'static [(u8, f64)],
    pub housenumbers: ColorDef,
    pub landcover: &'static [(&'static str, ColorDef)],
    pub landuse: &'static [(&'static str, ColorDef)],
    pub places: &'static [PlaceDef],
    pub pois: PoiDefs,
    pub roads: &'static [RoadDef],
    pub paths: PathDef,
    pub platforms: ColorDef,
    pub rail: ColorDef,
    pub aerial: ColorDef,
}

const fn tag(icon: &'static str, category: &'static str) -> PoiEntry {
    PoiEntry::Def(PoiDef {
        icon,
        category: Some(category),
        minzoom: None,
        size: None,
    })
}

const fn tag_z(icon: &'static str, category: &'static str, minzoom: i64) -> PoiEntry {
    PoiEntry::Def(PoiDef {
        icon,
        category: Some(category),
        minzoom: Some(minzoom),
        size: None,
    })
}

const fn tag_zs(icon: &'static str, category: &'static str, minzoom: i64, size: f64) -> PoiEntry {
    PoiEntry::Def(PoiDef {
        icon,
        category: Some(category),
        minzoom: Some(minzoom),
        size: Some(size),
    })
}

const fn tag_icon(icon: &'static str) -> PoiEntry {
    PoiEntry::Def(PoiDef {
        icon,
        category: None,
        minzoom: None,
        size: None,
    })
}

const fn fallback(icon: &'static str, category: &'static str) -> PoiDef {
    PoiDef {
        icon,
        category: Some(category),
        minzoom: None,
        size: None,
    }
}

const fn fallback_z(icon: &'static str, category: &'static str, minzoom: i64) -> PoiDef {
    PoiDef {
        icon,
        category: Some(category),
        minzoom: Some(minzoom),
        size: None,
    }
}

pub static DEFS: Defs = Defs {
    min_layer: -5,
    max_layer: 5,
    airports: AirportDef {
        symbol_color: pair("#ae78bf", "#9100bd"),
        runway_color: pair("#2d2832", "#d7cddc"),
    },
    buildings: pair("#464646", "#b4b4b4"),
    colors: Palette {
        background: pair("#191a19", "#deddda"),
        foreground: pair("#deddda", "#3d3846"),
        water: pair("#0f2f5e", "#99c1f1"),
        boundary: pair("#c0bfbc", "#77767b"),
        oneway_arrow: pair("#ffffff", "#000000"),
    },
    boundary_widths: &[
        /* Countries */
        (2, 1.5),
        /* Major, generally semi-autonomous regions of countries */
        (3, 1.0),
        /* States, provinces, etc. */
        (4, 0.8),
        /* Counties, cities, etc. based on country */
        (5, 0.5),
        (6, 0.4),
        (7, 0.3),
        (8, 0.2),
    ],
    housenumbers: pair("#9a9996", "#77767b"),
    landcover: &[
        ("farmland", pair("#262419", "#e8e7d0")),
        ("ice", pair("#232431", "#e2e1ff")),
        ("grass", pair("#334034", "#adccb3")),
        ("wetland", pair("#1e2627", "#ccd9d7")),
        ("wood", pair("#29342a", "#a3c2a9")),
        ("rock", pair("#232423", "#d4d3d0")),
        ("sand", pair("#2f281e", "#f2e3cb")),
    ],
    landuse: &[("pitch", pair("#334034", "#adccb3"))],
    places: &[
        PlaceDef {
            id: None,
            classes: &["continent"],
            font: "Light",
            color: pair("#deddda", "#3d3846"),
            minzoom: None,
            maxzoom: Some(2.0),
            max_rank: None,
            text_transform: None,
            size_stops: &[(0, 18.0), (1, 24.0)],
        },
        PlaceDef {
            id: None,
            classes: &["country"],
            font: "Extrabold",
            color: pair("#deddda", "#3d3846"),
            minzoom: None,
            maxzoom: Some(6.0),
            max_rank: None,
            text_transform: None,
            size_stops: &[(1, 14.0), (3, 16.0), (4, 20.0), (5, 24.0), (6, 28.0)],
        },
        PlaceDef {
            id: None,
            classes: &["state", "province"],
            font: "Bold",
            color: pair("#c0bfbc", "#5e5c64"),
            minzoom: Some(4.0),
            maxzoom: Some(8.0),
            max_rank: None,
            text_transform: Some("uppercase"),
            size_stops: &[(4, 14.0), (6, 20.0)],
        },
        PlaceDef {
            id: None,
            classes: &["city"],
            font: "Bold",
            color: pair("#deddda", "#3d3846"),
            minzoom: Some(4.0),
            maxzoom: Some(12.0),
            max_rank: None,
            text_transform: None,
            size_stops: &[(4, 10.0), (6, 16.0), (12, 24.0)],
        },
        PlaceDef {
            id: None,
            classes: &["town", "village"],
            font: "Bold",
            color: pair("#deddda", "#3d3846"),
            minzoom: None,
            maxzoom: Some(13.0),
            max_rank: None,
            text_transform: None,
            size_stops: &[(9, 12.0), (12, 18.0)],
        },
        PlaceDef {
            id: None,
            classes: &["neighborhood", "suburb", "quarter"],
            font: "Bold",
            color: pair("#c0bfbc", "#5e5c64"),
            minzoom: None,
            maxzoom: Some(15.0),
            max_rank: None,
            text_transform: Some("uppercase"),
            size_stops: &[(12, 12.0), (15, 18.0)],
        },
        PlaceDef {
            id: None,
            classes: &["hamlet"],
            font: "Bold",
            color: pair("#c0bfbc", "#5e5c64"),
            minzoom: None,
            maxzoom: Some(15.0),
            max_rank: None,
            text_transform: None,
            size_stops: &[(12, 12.0), (15, 18.0)],
        },
        PlaceDef {
            id: None,
            classes: &["isolated_dwelling"],
            font: "Regular",
            color: pair("#c0bfbc", "#5e5c64"),
            minzoom: Some(15.0),
            maxzoom: None,
            max_rank: None,
            text_transform: None,
            size_stops: &[(15, 15.0)],
        },
        PlaceDef {
            id: Some("place-island-large"),
            classes: &["island"],
            font: "Italic",
            color: pair("#c8bfbc", "#5e5c64"),
            minzoom: Some(8.0),
            maxzoom: Some(12.0),
            max_rank: Some(3),
            text_transform: None,
            size_stops: &[(6, 18.0)],
        },
        PlaceDef {
            id: None,
            classes: &["island"],
            font: "Italic",
            color: pair("#c8bfbc", "#5e5c64"),
            minzoom: Some(13.0),
            maxzoom: Some(18.0),
            max_rank: None,
            text_transform: None,
            size_stops: &[(13, 18.0)],
        },
    ],
    pois: PoiDefs {
        colors: &[
            ("education", pair("#d7c300", "#807620")),
            ("food", pair("#d78c00", "#bf7b00")),
            ("generic", GENERIC_POI_COLOR),
            ("healthAndSafety", pair("#ee9696", "#b25a5a")),
            ("hospitals", pair("#ed2f2f", "#b12323")),
            ("lodging", pair("#ff4de3", "#980081")),
            ("micro", pair("#6eeebe", "#32b282")),
            ("parks", pair("#00d700", "#007f00")),
            ("public", pair("#cca266", "#804b00")),
            ("traffic", pair("#ffffff", "#000000")),
            ("transport", pair("#8c8cdf", "#5050b2")),
        ],
        sport_icons: SportIcons {
            entries: &[
                ("american_football", "football-american-symbolic"),
                ("baseball", "baseball-symbolic"),
                ("golf", "golf-symbolic"),
                ("hockey", "hockey-symbolic"),
                ("tennis", "tennis-symbolic"),
                ("soccer", "football-symbolic"),
            ],
            default: "baseball-symbolic",
        },
        tags: &[
            PoiClass {
                class: "aeroway",
                entries: &[("aerodrome", tag_icon("flying-symbolic"))],
                default: None,
            },
            PoiClass {
                class: "aerialway",
                entries: &[("station", tag_z("gondola-symbolic", "transportation", 16))],
                default: None,
            },
            PoiClass {
                class: "amenity",
                entries: &[
                    ("arts_centre", tag("theater-symbolic", "generic")),
                    ("atm", tag_z("coin-symbolic", "micro", 16)),
                    ("bank", tag("bank-symbolic", "generic")),
                    ("bar", tag("bar-symbolic", "food")),
                    ("bbq", tag_z("barbecue-symbolic", "micro", 16)),
                    (
                        "bicycle_parking",
                        tag_zs("bicycle-parking-symbolic", "transport", 16, 0.75),
                    ),
                    ("bicycle_rental", tag_z("cycling-symbolic", "transport", 16)),
                    ("biergarten", tag("pub-symbolic", "food")),
                    ("bus_station", tag("bus-symbolic", "transport")),
                    ("cafe", tag("cafe-symbolic", "food")),
                    ("car_rental", tag("driving-symbolic", "transport")),
                    ("charging_station", tag("ev-symbolic", "transport")),
                    ("cinema", tag("video-camera-symbolic", "generic")),
                    ("clinic", tag("hospital-sign-symbolic", "healthAndSafety")),
                    ("clock", tag_z("clock-alt-symbolic", "micro", 16)),
                    ("college", tag("school-symbolic", "education")),
                    ("conference_centre", tag_z("meeting-symbolic", "public", 13)),
                    ("courthouse", tag("license-symbolic", "public")),
                    ("dentist", tag("dentist-symbolic", "healthAndSafety")),
                    ("doctors", tag("hospital-sign-symbolic", "healthAndSafety")),
                    (
                        "drinking_water",
                        tag_z("drinking-fountain-symbolic", "micro", 16),
                    ),
                    ("fast_food", tag("fast-food-symbolic", "food")),
                    ("ferry_terminal", tag_z("ferry-symbolic", "transport", 13)),
                    ("firepit", tag_z("barbecue-symbolic", "micro", 16)),
                    (
                        "fire_station",
                        tag_z("firefighter-symbolic", "healthAndSafety", 15),
                    ),
                    ("food_court", tag("restaurant-symbolic", "food")),
                    ("fuel", tag("fuel-symbolic", "transport")),
                    (
                        "grave_yard",
                        tag("non-religious-cemetary-symbolic", "parks"),
                    ),
                    ("hospital", tag_z("hospital-symbolic", "hospitals", 10)),
                    ("ice_cream", tag("icecream-cone-symbolic", "food")),
                    ("kindergarten", tag("school-symbolic", "education")),
                    ("library", tag_z("open-book-symbolic", "public", 14)),
                    ("luggage_locker", tag_z("briefcase-symbolic", "micro", 16)),
                    ("nightclub", tag("music-note-symbolic", "generic")),
                    (
                        "parking",
                        tag_zs("parking-sign-symbolic", "transport", 16, 0.75),
                    ),
                    ("pharmacy", tag("pharmacy-symbolic", "healthAndSafety")),
                    (
                        "place_of_worship",
                        tag_z("circle-small-symbolic", "public", 16),
                    ),
                    ("police", tag("police-badge2-symbolic", "healthAndSafety")),
                    ("post_box", tag_z("post-box-symbolic", "micro", 16)),
                    ("post_office", tag("post-box-symbolic", "generic")),
                    ("pub", tag("pub-symbolic", "food")),
                    ("recycling", tag_z("recycling-bin-symbolic", "micro", 16)),
                    ("restaurant", tag("restaurant-symbolic", "food")),
                    ("school", tag("school-symbolic", "education")),
                    ("taxi", tag_z("taxi-symbolic", "transportation", 16)),
                    ("telephone", tag_z("phone-oldschool-symbolic", "micro", 16)),
                    ("theatre", tag("theater-symbolic", "generic")),
                    ("toilets", tag_z("toilets-symbolic", "micro", 16)),
                    ("university", tag_z("school-symbolic", "education", 13)),
                    ("veterinary", tag("cat-symbolic", "healthAndSafety")),
                    ("waste_basket", tag_z("user-trash-symbolic", "micro", 16)),
                ],
                default: None,
            },
            PoiClass {
                class: "barrier",
                entries: &[
                    ("bollard", PoiEntry::Hidden),
                    ("cycle_barrier", tag_zs("gate-symbolic", "traffix", 17, 0.75)),
                    ("gate", tag_zs("gate-symbolic", "traffic", 17, 0.75)),
                    ("lift_gate", tag_zs("gate-symbolic", "traffic", 17, 0.75)),
                    ("toll_booth", tag_zs("money-symbolic", "traffic", 17, 0.75)),
                ],
                default: None,
            },
            PoiClass {
                class: "building",
                entries: &[("railway_station", tag_z("train-symbolic", "transport", 16))],
                default: Some(fallback_z("building-symbolic", "generic", 16)),
            },
            PoiClass {
                class: "highway",
                entries: &[
                    ("bus_guideway", tag_z("bus-symbolic", "transport", 16)),
                    ("bus_stop", tag_z("bus-symbolic", "transport", 16)),
                    ("busway", tag_z("bus-symbolic", "transport", 16)),
                    ("cycleway", tag_z("cycling-symbolic", "transport", 16)),
                    ("footway", tag_z("walking-symbolic", "transport", 16)),
                    ("pedestrian", tag_z("walking-symbolic", "transport", 16)),
                    ("platform", tag_z("bus-symbolic", "transport", 16)),
                    ("steps", tag_z("steps-symbolic", "transport", 16)),
                    ("path", tag_z("walking-symbolic", "transport", 16)),
                ],
                default: Some(fallback_z("driving-symbolic", "transport", 16)),
            },
            PoiClass {
                class: "historic",
                entries: &[("monument", tag("museum-symbolic", "public"))],
                default: None,
            },
            PoiClass {
                class: "information",
                entries: &[
                    ("office", tag_z("explore-symbolic", "micro", 14)),
                    ("visitor_centre", tag_z("explore-symbolic", "micro", 14)),
                ],
                default: Some(fallback("explore-symbolic", "micro")),
            },
            PoiClass {
                class: "landuse",
                entries: &[("cemetery", tag("non-religious-cemetary-symbolic", "parks"))],
                default: None,
            },
            PoiClass {
                class: "leisure",
                entries: &[
                    ("dog_park", tag("dog-symbolic", "parks")),
                    ("fitness_centre", tag("weight2-symbolic", "generic")),
                    ("fitness_station", tag_z("weight2-symbolic", "micro", 16)),
                    ("garden", tag_z("leaf-symbolic", "parks", 16)),
                    ("golf_course", tag_z("golf-symbolic", "parks", 14)),
                    ("mini_golf", tag("golf-symbolic", "parks")),
                    ("miniature_golf", tag("golf-symbolic", "parks")),
                    ("nature_reserve", tag_z("sprout-symbolic", "parks", 10)),
                    ("park", tag_z("tree-circle-symbolic", "parks", 10)),
                    ("pitch", tag_z("@sport", "parks", 16)),
                    ("playground", tag_z("playground3-symbolic", "parks", 16)),
                    ("sports_centre", tag_z("@sport", "parks", 13)),
                    ("stadium", tag_z("@sport", "parks", 14)),
                    ("swimming_pool", PoiEntry::Hidden),
                ],
                default: None,
            },
            PoiClass {
                class: "natural",
                entries: &[
                    ("hill", tag("mountain-symbolic", "parks")),
                    ("peak", tag("mountain-symbolic", "parks")),
                    ("volcano", tag("mountain-symbolic", "parks")),
                ],
                default: None,
            },
            PoiClass {
                class: "office",
                entries: &[("diplomatic", tag("flag-filled-symbolic", "public"))],
                default: Some(fallback("building-symbolic", "generic")),
            },
            PoiClass {
                class: "place",
                entries: &[
                    ("borough", tag_icon("city-symbolic")),
                    ("city", tag_icon("city-symbolic")),
                    ("city_block", tag_icon("building-symbolic")),
                    ("continent", tag_icon("earth-symbolic")),
                    ("country", tag_icon("flag-filled-symbolic")),
                    ("hamlet", tag_icon("town-symbolic")),
                    ("isolated_dwelling", tag_icon("building-symbolic")),
                    ("neighbourhood", tag_icon("town-symbolic")),
                    ("quarter", tag_icon("town-symbolic")),
                    ("province", tag_icon("flag-outline-thick-symbolic")),
                    ("region", tag_icon("flag-outline-thick-symbolic")),
                    ("square", tag_icon("walking-symbolic")),
                    ("state", tag_icon("flag-outline-thick-symbolic")),
                    ("suburb", tag_icon("town-symbolic")),
                    ("town", tag_icon("town-symbolic")),
                    ("village", tag_icon("town-symbolic")),
                ],
                default: None,
            },
            PoiClass {
                class: "railway",
                entries: &[
                    ("halt", tag_z("@station", "transport", 12)),
                    ("station", tag_z("@station", "transport", 10)),
                    ("stop", tag_z("@station", "transport", 12)),
                    ("subway_entrance", tag_z("exit-symbolic", "transport", 16)),
                    (
                        "train_station_entrance",
                        tag_z("exit-symbolic", "transport", 16),
                    ),
                    ("tram_stop", tag_z("@station", "transport", 12)),
                ],
                default: None,
            },
            PoiClass {
                class: "shop",
                entries: &[
                    ("alcohol", tag("drinks-symbolic", "generic")),
                    ("art", tag("brush-symbolic", "generic")),
                    ("bakery", tag("bread-symbolic", "generic")),
                    ("bicycle", tag("cycling-symbolic", "generic")),
                    ("books", tag("library-symbolic", "generic")),
                    ("car", tag("driving-symbolic", "generic")),
                    ("car_repair", tag("wrench-wide-symbolic", "shop")),
                    ("clothes", tag("clothing-store-symbolic", "generic")),
                    ("clothing", tag("clothing-store-symbolic", "generic")),
                    ("computer", tag("phonelink2-symbolic", "generic")),
                    ("convenience", tag("shopping-cart-symbolic", "generic")),
                    ("department_store", tag("shop-symbolic", "generic")),
                    ("electronics", tag("phonelink2-symbolic", "generic")),
                    ("general", tag("shop-symbolic", "generic")),
                    ("gift", tag("package-x-generic-symbolic", "generic")),
                    ("golf", tag("golf-symbolic", "generic")),
                    ("grocery", tag("shopping-cart-symbolic", "generic")),
                    ("hairdresser", tag("barber-symbolic", "generic")),
                    ("hardware", tag("build-alt-symbolic", "generic")),
                    ("ice_cream", tag("icecream-cone-symbolic", "food")),
                    ("jewelry", tag("anniversary-symbolic", "generic")),
                    ("locksmith", tag("key2-symbolic", "generic")),
                    ("mall", tag_z("shop-symbolic", "generic", 14)),
                    ("mobile_phone", tag("smartphone-symbolic", "generic")),
                    ("music", tag("headphones-symbolic", "generic")),
                    ("newsagent", tag("newspaper-symbolic", "generic")),
                    (
                        "optician",
                        tag("eye-open-negative-filled-symbolic", "generic"),
                    ),
                    ("pet", tag("cat-symbolic", "generic")),
                    ("photo", tag("photo-camera-symbolic", "generic")),
                    ("sports", tag("@sport", "generic")),
                    ("supermarket", tag_z("shopping-cart-symbolic", "generic", 14)),
                    ("ticket", tag("ticket-symbolic", "generic")),
                    ("video_games", tag("gamepad-symbolic", "generic")),
                    ("wine", tag("drinks-symbolic", "generic")),
                ],
                default: Some(fallback("shop-symbolic", "generic")),
            },
            PoiClass {
                class: "tourism",
                entries: &[
                    ("alpine_hut", tag("bed-symbolic", "lodging")),
                    ("apartment", tag("bed-symbolic", "lodging")),
                    ("attraction", tag("photo-camera-symbolic", "public")),
                    ("artwork", tag("photo-camera-symbolic", "micro")),
                    ("butcher", tag("salami-symbolic", "generic")),
                    ("chalet", tag("bed-symbolic", "lodging")),
                    ("gallery", tag("museum-symbolic", "public")),
                    ("guest_house", tag("bed-symbolic", "lodging")),
                    ("hostel", tag("bed-symbolic", "lodging")),
                    ("hotel", tag_z("bed-symbolic", "lodging", 14)),
                    ("information", tag("explore-symbolic", "micro")),
                    ("motel", tag("bed-symbolic", "lodging")),
                    ("museum", tag("museum-symbolic", "public")),
                    ("picnic_site", tag_z("bench-symbolic", "micro", 16)),
                    ("viewpoint", tag("photo-camera-symbolic", "public")),
                    ("zoo", tag("penguin-symbolic", "public")),
                ],
                default: None,
            },
        ],
    },
    roads: &[
        RoadDef {
            classes: &["path"],
            subclasses: Some(&["pedestrian"]),
            color: pair("#25242a", "#bebdc8"),
            size: 0.75,
            casing_minzoom: None,
            casing_scale: 1.0,
        },
        RoadDef {
            classes: &["path"],
            subclasses: Some(&["platform"]),
            color: pair("#483a3d", "#bebdc8"),
            size: 1.0,
            casing_minzoom: None,
            casing_scale: 1.0,
        },
        RoadDef {
            classes: &["service", "track"],
            subclasses: None,
            color: pair("#2a2924", "#c8c7b4"),
            size: 0.5,
            casing_minzoom: Some(CasingMinZoom {
                dark: Some(14.0),
                light: None,
            }),
            casing_scale: 0.4,
        },
        RoadDef {
            classes: &["tertiary", "minor"],
            subclasses: None,
            color: pair("#413f39", "#d7d2bc"),
            size: 1.0,
            casing_minzoom: Some(CasingMinZoom {
                dark: Some(14.0),
                light: None,
            }),
            casing_scale: 1.0,
        },
        RoadDef {
            classes: &["secondary"],
            subclasses: None,
            color: pair("#453324", "#ebd68a"),
            size: 1.5,
            casing_minzoom: None,
            casing_scale: 1.0,
        },
        RoadDef {
            classes: &["trunk", "primary"],
            subclasses: None,
            color: pair("#493727", "#e9cf75"),
            size: 1.75,
            casing_minzoom: None,
            casing_scale: 1.0,
        },
        RoadDef {
            classes: &["motorway"],
            subclasses: None,
            color: pair("#58422e", "#e1c172"),
            size: 2.0,
            casing_minzoom: None,
            casing_scale: 1.0,
        },
        RoadDef {
            classes: &["busway"],
            subclasses: None,
            color: pair("#2b151b", "#e1aab1"),
            size: 1.0,
            casing_minzoom: None,
            casing_scale: 1.0,
        },
        RoadDef {
            classes: &["bus_guideway"],
            subclasses: None,
            color: pair("#2b151b", "#e1aab1"),
            size: 1.25,
            casing_minzoom: None,
            casing_scale: 1.0,
        },
    ],
    paths: PathDef {
        color: pair("#5e5c64", "#9a9996"),
        size: 0.2,
    },
    platforms: pair("#483a3d", "#bebdc8"),
    rail: pair("#91747b", "#c89299"),
    aerial: pair("#91747b", "#c89299"),
};

/// A fully resolved POI table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoiInfo {
    pub icon: &'static str,
    pub category: &'static str,
    pub minzoom: i64,
    pub size: f64,
}

/// Resolves a POI class/subclass against the tag table.
///
/// Fallback order: exact subclass entry, then the class-wide default, then
/// the generic default (`circle-small-symbolic`, category `generic`,
/// min zoom 16). Hidden entries resolve with min zoom 100.
pub fn poi_info(class: &str, subclass: &str) -> PoiInfo {
    let resolve = |entry: &PoiEntry| PoiInfo {
        icon: entry.def().map(|d| d.icon).unwrap_or("circle-small-symbolic"),
        category: entry.def().and_then(|d| d.category).unwrap_or("generic"),
        minzoom: entry.minzoom(),
        size: entry.def().and_then(|d| d.size).unwrap_or(1.0),
    };

    DEFS.pois
        .tags
        .iter()
        .find(|c| c.class == class)
        .and_then(|c| {
            c.entries
                .iter()
                .find(|(name, _)| *name == subclass)
                .map(|(_, entry)| resolve(entry))
                .or_else(|| c.default.map(|d| resolve(&PoiEntry::Def(d))))
        })
        .unwrap_or(PoiInfo {
            icon: "circle-small-symbolic",
            category: "generic",
            minzoom: 16,
            size: 1.0,
        })
}

/// Looks up a POI category color; unknown categories fall back to `generic`.
///
/// The tag table references a few categories the palette never defines
/// (`transportation`, `shop`, `traffix`); those render with the generic
/// color, matching the reference style output.
pub fn category_color(category: &str) -> Option<&'static ColorDef> {
    DEFS.pois
        .colors
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poi_info_exact_entry() {
        let info = poi_info("amenity", "hospital");
        assert_eq!(info.icon, "hospital-symbolic");
        assert_eq!(info.category, "hospitals");
        assert_eq!(info.minzoom, 10);
    }

    #[test]
    fn test_poi_info_falls_back_to_class_default() {
        let info = poi_info("shop", "haberdashery");
        assert_eq!(info.icon, "shop-symbolic");
        assert_eq!(info.category, "generic");
        assert_eq!(info.minzoom, 15);
    }

    #[test]
    fn test_poi_info_falls_back_to_generic_default() {
        let info = poi_info("frobnicator", "widget");
        assert_eq!(info.icon, "circle-small-symbolic");
        assert_eq!(info.category, "generic");
        assert_eq!(info.minzoom, 16);
    }

    #[test]
    fn test_poi_info_hidden_entries_never_show() {
        assert_eq!(poi_info("barrier", "bollard").minzoom, 100);
        assert_eq!(poi_info("leisure", "swimming_pool").minzoom, 100);
    }

    #[test]
    fn test_unknown_categories_have_no_color() {
        assert!(category_color("transport").is_some());
        assert!(category_color("transportation").is_none());
        assert!(category_color("traffix").is_none());
    }

    #[test]
    fn test_boundary_widths_cover_admin_levels() {
        let levels: Vec<u8> = DEFS.boundary_widths.iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, vec![2, 3, 4, 5, 6, 7, 8]);
    }
}
