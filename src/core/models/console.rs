//! Console records

use crate::core::models::game::normalize;
use crate::utils::error::{Result, VaultError};
use serde::{Deserialize, Serialize};

/// A console in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Console {
    pub id: i32,
    pub name: String,
    pub model: String,
    /// Lowercased, space-stripped model used for filtering
    pub model_normalized: String,
    pub release_year: i32,
    pub manufacturer: String,
    pub serial_number_box: String,
    /// Serial number on the unit itself (unique)
    pub serial_number_console: String,
    pub complete_in_box: bool,
    pub condition: String,
    pub inventory: i32,
    pub sealed: bool,
}

/// Create/update payload for a console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolePayload {
    pub name: String,
    pub model: String,
    pub release_year: i32,
    pub manufacturer: String,
    pub serial_number_box: String,
    pub serial_number_console: String,
    #[serde(default)]
    pub complete_in_box: bool,
    pub condition: String,
    pub inventory: i32,
    #[serde(default)]
    pub sealed: bool,
}

impl ConsolePayload {
    /// Validate field contents
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("name", &self.name),
            ("model", &self.model),
            ("manufacturer", &self.manufacturer),
            ("serial_number_box", &self.serial_number_box),
            ("serial_number_console", &self.serial_number_console),
            ("condition", &self.condition),
        ] {
            if value.trim().is_empty() {
                return Err(VaultError::Validation(format!("{} is required", name)));
            }
        }
        if self.inventory < 0 {
            return Err(VaultError::Validation(
                "inventory cannot be negative".into(),
            ));
        }
        Ok(())
    }

    /// Normalized model key for filtering
    pub fn model_normalized(&self) -> String {
        normalize(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ConsolePayload {
        ConsolePayload {
            name: "Mega Drive".into(),
            model: "HAA-2510".into(),
            release_year: 1990,
            manufacturer: "Sega".into(),
            serial_number_box: "B-001".into(),
            serial_number_console: "C-001".into(),
            complete_in_box: true,
            condition: "good".into(),
            inventory: 1,
            sealed: false,
        }
    }

    #[test]
    fn valid_payload_passes() {
        payload().validate().unwrap();
    }

    #[test]
    fn missing_serial_is_rejected() {
        let mut p = payload();
        p.serial_number_console = String::new();
        assert!(p.validate().is_err());
    }

    #[test]
    fn model_is_normalized() {
        let mut p = payload();
        p.model = "HAA 2510 EU".into();
        assert_eq!(p.model_normalized(), "haa2510eu");
    }
}
