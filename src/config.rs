//! Application Configuration
//!
//! Values are read at compile time via `option_env!` (see `build.rs` for
//! `.env` support) and fall back to the defaults below.

use std::str::FromStr;

use collector_form::Coordinate;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the collector point backend
    pub backend_url: String,
    /// Base URL of the public geography service
    pub geography_url: String,
    pub log_level: log::Level,
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Center used until the device position is known
    pub default_center: Coordinate,
    pub default_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3333".to_string(),
            geography_url: "https://servicodados.ibge.gov.br/api/v1".to_string(),
            log_level: log::Level::Info,
            map: MapConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: Coordinate::new(-30.140719, -51.130112),
            default_zoom: 13.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(trim_base_url)
                .unwrap_or(defaults.backend_url),
            geography_url: option_env!("GEOGRAPHY_URL")
                .map(trim_base_url)
                .unwrap_or(defaults.geography_url),
            log_level: parse_or(option_env!("LOG_LEVEL"), defaults.log_level),
            map: MapConfig {
                default_center: Coordinate::new(
                    parse_or(option_env!("DEFAULT_MAP_CENTER_LAT"), defaults.map.default_center.latitude),
                    parse_or(option_env!("DEFAULT_MAP_CENTER_LNG"), defaults.map.default_center.longitude),
                ),
                default_zoom: parse_or(option_env!("DEFAULT_MAP_ZOOM"), defaults.map.default_zoom),
                tile_url: option_env!("MAP_TILE_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.map.tile_url),
                attribution: defaults.map.attribution,
            },
        }
    }
}

/// Parse an optional raw value, keeping `default` when absent or invalid
fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or(Some(" 15 "), 13.0), 15.0);
        assert_eq!(parse_or(Some("north"), 13.0), 13.0);
        assert_eq!(parse_or::<f64>(None, 13.0), 13.0);
        assert_eq!(parse_or(Some("debug"), log::Level::Info), log::Level::Debug);
    }

    #[test]
    fn test_trim_base_url() {
        assert_eq!(trim_base_url("http://localhost:3333/ "), "http://localhost:3333");
        assert_eq!(trim_base_url("https://api.example.com"), "https://api.example.com");
    }

    #[test]
    fn test_default_map_center() {
        let config = AppConfig::default();
        assert_eq!(config.map.default_center, Coordinate::new(-30.140719, -51.130112));
        assert_eq!(config.map.default_zoom, 13.0);
    }
}
