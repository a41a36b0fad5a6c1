//! Tunable constants of the rotation heuristic.
//!
//! The defaults reproduce the reference behavior: a proximity window of
//! six tables on either side of a participant's previous seat, and one
//! round per ten minutes when the round length is derived automatically.

use serde::{Deserialize, Serialize};

/// Default half-width of the table window preferred after round 1.
pub const DEFAULT_PROXIMITY_RADIUS: usize = 6;

/// Default round length (minutes) used when deriving the round count.
pub const DEFAULT_AUTO_ROUND_MINUTES: u32 = 10;

/// Default prefix of generated table names.
pub const DEFAULT_TABLE_NAME_PREFIX: &str = "Table";

/// Heuristic configuration for [`RotationScheduler`](crate::rotation::RotationScheduler).
///
/// Missing fields deserialize to their defaults, so a partial JSON/TOML
/// object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Tables within `±proximity_radius` (modulo table count) of the
    /// previous seat are tried first.
    pub proximity_radius: usize,
    /// Target round length when `time_per_round_minutes == 0`.
    pub auto_round_minutes: u32,
    /// Table names are `"{prefix} {table_id}"`.
    pub table_name_prefix: String,
}

impl RotationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the proximity radius.
    pub fn with_proximity_radius(mut self, radius: usize) -> Self {
        self.proximity_radius = radius;
        self
    }

    /// Sets the automatic round length. Zero is clamped to one minute.
    pub fn with_auto_round_minutes(mut self, minutes: u32) -> Self {
        self.auto_round_minutes = minutes.max(1);
        self
    }

    /// Sets the table name prefix.
    pub fn with_table_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_name_prefix = prefix.into();
        self
    }

    /// Display name of a 1-based table id.
    pub fn table_name(&self, table_id: usize) -> String {
        if self.table_name_prefix.is_empty() {
            table_id.to_string()
        } else {
            format!("{} {table_id}", self.table_name_prefix)
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            proximity_radius: DEFAULT_PROXIMITY_RADIUS,
            auto_round_minutes: DEFAULT_AUTO_ROUND_MINUTES,
            table_name_prefix: DEFAULT_TABLE_NAME_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RotationConfig::default();
        assert_eq!(config.proximity_radius, 6);
        assert_eq!(config.auto_round_minutes, 10);
        assert_eq!(config.table_name(3), "Table 3");
    }

    #[test]
    fn test_builder() {
        let config = RotationConfig::new()
            .with_proximity_radius(2)
            .with_auto_round_minutes(0)
            .with_table_name_prefix("");
        assert_eq!(config.proximity_radius, 2);
        assert_eq!(config.auto_round_minutes, 1); // clamped
        assert_eq!(config.table_name(7), "7");
    }

    #[test]
    fn test_partial_deserialize() {
        let config: RotationConfig = serde_json::from_str(r#"{"proximity_radius": 3}"#).unwrap();
        assert_eq!(config.proximity_radius, 3);
        assert_eq!(config.auto_round_minutes, DEFAULT_AUTO_ROUND_MINUTES);
        assert_eq!(config.table_name_prefix, "Table");
    }
}
