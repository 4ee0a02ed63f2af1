//! Profile history configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Most records returned when listing a session
    #[serde(default = "default_max_profiles")]
    pub max_profiles: u32,
}

impl HistoryConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_profiles == 0 || self.max_profiles > 500 {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_profiles: default_max_profiles(),
        }
    }
}

fn default_max_profiles() -> u32 {
    50
}
