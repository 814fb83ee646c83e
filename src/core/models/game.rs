//! Game records

use crate::utils::error::{Result, VaultError};
use serde::{Deserialize, Serialize};

/// A game in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub manufacturer: String,
    pub description: Option<String>,
    pub genre: String,
    pub platform: String,
    /// Lowercased, space-stripped platform used for filtering
    pub platform_normalized: String,
    pub score: i32,
    pub complete_in_box: bool,
    pub condition: String,
    pub inventory: i32,
    pub sealed: bool,
}

/// Create/update payload for a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePayload {
    pub title: String,
    pub release_year: i32,
    pub manufacturer: String,
    #[serde(default)]
    pub description: Option<String>,
    pub genre: String,
    pub platform: String,
    pub score: i32,
    #[serde(default)]
    pub complete_in_box: bool,
    pub condition: String,
    pub inventory: i32,
    #[serde(default)]
    pub sealed: bool,
}

impl GamePayload {
    /// Validate field contents
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("title", &self.title),
            ("manufacturer", &self.manufacturer),
            ("genre", &self.genre),
            ("platform", &self.platform),
            ("condition", &self.condition),
        ] {
            if value.trim().is_empty() {
                return Err(VaultError::Validation(format!("{} is required", name)));
            }
        }
        if !(0..=10).contains(&self.score) {
            return Err(VaultError::Validation(
                "score must be between 0 and 10".into(),
            ));
        }
        if self.inventory < 0 {
            return Err(VaultError::Validation(
                "inventory cannot be negative".into(),
            ));
        }
        Ok(())
    }

    /// Normalized platform key for filtering
    pub fn platform_normalized(&self) -> String {
        normalize(&self.platform)
    }
}

/// Lowercase and strip spaces, matching how records are filtered by platform
/// or model
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> GamePayload {
        GamePayload {
            title: "Super Metroid".into(),
            release_year: 1994,
            manufacturer: "Nintendo".into(),
            description: None,
            genre: "Action".into(),
            platform: "Super Nintendo".into(),
            score: 10,
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
    fn score_out_of_range_is_rejected() {
        let mut p = payload();
        p.score = 11;
        assert!(p.validate().is_err());
        p.score = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn negative_inventory_is_rejected() {
        let mut p = payload();
        p.inventory = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut p = payload();
        p.title = "  ".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn platform_is_normalized() {
        assert_eq!(payload().platform_normalized(), "supernintendo");
        assert_eq!(normalize("Game Boy Advance"), "gameboyadvance");
    }
}
