//! Per-device field validation.
//!
//! Converts the raw `orientation` and `frame` values of a [`DeviceEntry`]
//! into typed [`DeviceSettings`]. A missing key is always valid and stays
//! unspecified; no defaults are substituted here.

use crate::config::schema::{DeviceEntry, DeviceSettings, FieldValue, Orientation};
use crate::error::{Result, ShotcheckError};

/// Validate a device's fields and return its typed settings.
///
/// # Errors
///
/// Returns `InvalidFieldValue` for the first invalid field, `orientation`
/// before `frame`.
pub fn validate_device(name: &str, entry: &DeviceEntry) -> Result<DeviceSettings> {
    Ok(DeviceSettings {
        orientation: validate_orientation(name, &entry.orientation)?,
        frame: validate_frame(name, &entry.frame)?,
    })
}

fn validate_orientation(device: &str, value: &FieldValue) -> Result<Option<Orientation>> {
    match value {
        // `orientation:` with no value is the same as leaving it out
        FieldValue::Absent | FieldValue::Present(serde_yaml::Value::Null) => Ok(None),
        FieldValue::Present(serde_yaml::Value::String(s)) => match s.parse::<Orientation>() {
            Ok(orientation) => Ok(Some(orientation)),
            Err(_) => Err(invalid(device, "orientation", value, Orientation::names())),
        },
        FieldValue::Present(_) => Err(invalid(device, "orientation", value, Orientation::names())),
    }
}

fn validate_frame(device: &str, value: &FieldValue) -> Result<Option<bool>> {
    match value {
        FieldValue::Absent => Ok(None),
        FieldValue::Present(serde_yaml::Value::Bool(b)) => Ok(Some(*b)),
        FieldValue::Present(_) => Err(invalid(
            device,
            "frame",
            value,
            vec!["true".to_string(), "false".to_string()],
        )),
    }
}

fn invalid(device: &str, field: &str, value: &FieldValue, valid: Vec<String>) -> ShotcheckError {
    ShotcheckError::InvalidFieldValue {
        device: device.to_string(),
        field: field.to_string(),
        value: value.display_value(),
        valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn entry(orientation: FieldValue, frame: FieldValue) -> DeviceEntry {
        DeviceEntry { orientation, frame }
    }

    fn string(s: &str) -> FieldValue {
        FieldValue::Present(Value::String(s.to_string()))
    }

    #[test]
    fn absent_fields_are_unspecified() {
        let settings = validate_device("Pixel 4", &DeviceEntry::default()).unwrap();
        assert_eq!(settings, DeviceSettings::default());
        assert_eq!(settings.frame, None);
    }

    #[test]
    fn accepts_every_orientation() {
        for orientation in Orientation::ALL {
            let e = entry(string(orientation.as_str()), FieldValue::Absent);
            let settings = validate_device("Pixel 4", &e).unwrap();
            assert_eq!(settings.orientation, Some(orientation));
        }
    }

    #[test]
    fn rejects_unknown_orientation_with_valid_list() {
        let e = entry(string("Sideways"), FieldValue::Absent);
        let err = validate_device("Pixel 4", &e).unwrap_err();
        match err {
            ShotcheckError::InvalidFieldValue {
                device,
                field,
                value,
                valid,
            } => {
                assert_eq!(device, "Pixel 4");
                assert_eq!(field, "orientation");
                assert_eq!(value, "Sideways");
                assert_eq!(valid, Orientation::names());
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn orientation_is_case_sensitive() {
        let e = entry(string("Portrait"), FieldValue::Absent);
        assert!(validate_device("Pixel 4", &e).is_err());
    }

    #[test]
    fn rejects_non_string_orientation() {
        let e = entry(FieldValue::Present(Value::from(90)), FieldValue::Absent);
        assert!(validate_device("Pixel 4", &e).is_err());
    }

    #[test]
    fn null_orientation_is_unspecified() {
        let e = entry(FieldValue::Present(Value::Null), FieldValue::Absent);
        let settings = validate_device("Pixel 4", &e).unwrap();
        assert_eq!(settings.orientation, None);
    }

    #[test]
    fn accepts_boolean_frame() {
        let on = entry(FieldValue::Absent, FieldValue::Present(Value::Bool(true)));
        let off = entry(FieldValue::Absent, FieldValue::Present(Value::Bool(false)));
        assert_eq!(validate_device("d", &on).unwrap().frame, Some(true));
        assert_eq!(validate_device("d", &off).unwrap().frame, Some(false));
    }

    #[test]
    fn rejects_non_boolean_frame() {
        for value in [
            Value::String("true".into()),
            Value::from(1),
            Value::String(String::new()),
            Value::Null,
        ] {
            let e = entry(FieldValue::Absent, FieldValue::Present(value));
            let err = validate_device("iPhone X", &e).unwrap_err();
            assert!(
                matches!(&err, ShotcheckError::InvalidFieldValue { field, .. } if field == "frame")
            );
        }
    }

    #[test]
    fn orientation_checked_before_frame() {
        let e = entry(string("bad"), FieldValue::Present(Value::from(3)));
        let err = validate_device("d", &e).unwrap_err();
        assert!(
            matches!(err, ShotcheckError::InvalidFieldValue { field, .. } if field == "orientation")
        );
    }
}
