//! Bakes `.env` values into the `option_env!` lookups of `src/config.rs`.

use std::env;
use std::fs;

/// Keys read by `AppConfig::from_env`
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "GEOGRAPHY_URL",
    "LOG_LEVEL",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "MAP_TILE_URL",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        return;
    };

    let entries = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim().trim_matches('"')));

    for (key, value) in entries {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env key {} is not a configuration key, ignoring", key);
            continue;
        }
        // The build environment wins over .env
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
