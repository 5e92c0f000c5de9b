use crate::error::RequestError;
use serde::{Deserialize, Serialize};

pub const MIN_ROW_COUNT: i64 = 1;
pub const MAX_ROW_COUNT: i64 = 1000;

/// A request to generate `row_count` rows for a free-text scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub scenario: String,
    pub row_count: i64,
}

impl GenerateRequest {
    #[must_use]
    pub fn new(scenario: impl Into<String>, row_count: i64) -> Self {
        Self {
            scenario: scenario.into(),
            row_count,
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.scenario.trim().is_empty() {
            return Err(RequestError::InvalidScenario);
        }
        if !(MIN_ROW_COUNT..=MAX_ROW_COUNT).contains(&self.row_count) {
            return Err(RequestError::InvalidRowCount {
                count: self.row_count,
            });
        }
        Ok(())
    }
}
