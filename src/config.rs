use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{CycleError, CycleResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleConfig {
    pub cycle: CycleWindow,
    pub schedules: Vec<ScheduleConfig>,
}

/// Nominal start/end of the cycle; the estimator extends the plotted
/// range 28 days past `end` to show post-cycle clearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub name: String,
    pub amount: f64,
    pub dosing_period_days: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub half_life_hours: f64,
}

impl CycleConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> CycleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CycleConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CycleResult<()> {
        if self.cycle.start > self.cycle.end {
            return Err(CycleError::Validation(
                "Cycle start must not be after cycle end".to_string()
            ));
        }

        for schedule in &self.schedules {
            schedule.validate()?;
        }

        Ok(())
    }
}

impl ScheduleConfig {
    fn validate(&self) -> CycleResult<()> {
        if self.name.trim().is_empty() {
            return Err(CycleError::InvalidSchedule(
                "Compound name must not be empty".to_string()
            ));
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(CycleError::InvalidSchedule(
                format!("Dose amount for {} must be positive", self.name)
            ));
        }

        if self.dosing_period_days < 1 {
            return Err(CycleError::InvalidSchedule(
                format!("Dosing period for {} must be at least 1 day", self.name)
            ));
        }

        if !self.half_life_hours.is_finite() || self.half_life_hours <= 0.0 {
            return Err(CycleError::InvalidSchedule(
                format!("Half-life for {} must be positive", self.name)
            ));
        }

        if self.start_date > self.end_date {
            return Err(CycleError::InvalidSchedule(
                format!("Schedule for {} starts after it ends", self.name)
            ));
        }

        Ok(())
    }
}
