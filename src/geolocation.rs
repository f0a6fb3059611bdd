//! Device Geolocation
//!
//! One-shot wrapper over `navigator.geolocation.getCurrentPosition`.
//! The position objects are read through `Reflect` so no unstable
//! `web-sys` bindings are needed.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use collector_form::{Coordinate, GeolocationError};

/// Ask the browser for the current position once
pub async fn current_position() -> Result<Coordinate, GeolocationError> {
    let navigator = web_sys::window().ok_or(GeolocationError::Unavailable)?.navigator();
    let geolocation = property(&navigator, "geolocation").ok_or(GeolocationError::Unavailable)?;
    let get_current_position: Function = property(&geolocation, "getCurrentPosition")
        .and_then(|f| f.dyn_into().ok())
        .ok_or(GeolocationError::Unavailable)?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) = get_current_position.call2(&geolocation, &resolve, &reject) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    let position = JsFuture::from(promise).await.map_err(|err| position_error(&err))?;
    let coords = property(&position, "coords");
    coordinate_from_parts(
        coords.as_ref().and_then(|c| number(c, "latitude")),
        coords.as_ref().and_then(|c| number(c, "longitude")),
    )
}

fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn number(target: &JsValue, key: &str) -> Option<f64> {
    property(target, key)?.as_f64()
}

/// Map a rejected `getCurrentPosition` value (a `GeolocationPositionError`)
fn position_error(value: &JsValue) -> GeolocationError {
    error_from_parts(
        number(value, "code"),
        property(value, "message").and_then(|m| m.as_string()),
    )
}

fn error_from_parts(code: Option<f64>, message: Option<String>) -> GeolocationError {
    let message = message.unwrap_or_else(|| "unknown geolocation failure".to_string());
    match code {
        Some(code) if code.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&code) => {
            GeolocationError::from_code(code as u16, message)
        }
        _ => GeolocationError::Other(message),
    }
}

fn coordinate_from_parts(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Coordinate, GeolocationError> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(Coordinate::new(latitude, longitude)),
        _ => Err(GeolocationError::Other("position without coordinates".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_map_to_kinds() {
        assert_eq!(
            error_from_parts(Some(1.0), Some("User denied Geolocation".to_string())),
            GeolocationError::PermissionDenied
        );
        assert_eq!(error_from_parts(Some(2.0), None), GeolocationError::PositionUnavailable);
        assert_eq!(error_from_parts(Some(3.0), None), GeolocationError::Timeout);
    }

    #[test]
    fn test_error_without_code_keeps_message() {
        assert_eq!(
            error_from_parts(None, Some("blocked by policy".to_string())),
            GeolocationError::Other("blocked by policy".to_string())
        );
        assert_eq!(
            error_from_parts(Some(1.5), None),
            GeolocationError::Other("unknown geolocation failure".to_string())
        );
    }

    #[test]
    fn test_coordinate_requires_both_parts() {
        assert_eq!(
            coordinate_from_parts(Some(-30.05), Some(-51.17)),
            Ok(Coordinate::new(-30.05, -51.17))
        );
        assert!(coordinate_from_parts(Some(-30.05), None).is_err());
        assert!(coordinate_from_parts(None, None).is_err());
    }
}
