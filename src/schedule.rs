use chrono::{Days, NaiveDate};
use crate::config::ScheduleConfig;

/// One compound entry within a cycle: dose size, repeat interval, active
/// date range, and the compound's elimination half-life. Multiple
/// schedules may share a `name` (e.g. front-loading) and are aggregated
/// into one series by the estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct DosingSchedule {
    pub name: String,
    pub amount: f64,
    pub dosing_period_days: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub half_life_hours: f64,
}

impl DosingSchedule {
    /// All administration dates: `start_date`, `start_date + period`, ...
    /// while within `end_date` (inclusive). A schedule whose start is
    /// after its end produces no doses.
    pub fn dose_dates(&self) -> Vec<NaiveDate> {
        self.dose_dates_through(self.end_date)
    }

    /// Administration dates at or before `cutoff`. Doses strictly after
    /// the cutoff never contribute to that date's value.
    pub fn dose_dates_through(&self, cutoff: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        // Clamp so a malformed zero period cannot stall the loop.
        let period = Days::new(u64::from(self.dosing_period_days.max(1)));

        let mut dose_date = self.start_date;
        while dose_date <= self.end_date && dose_date <= cutoff {
            dates.push(dose_date);
            match dose_date.checked_add_days(period) {
                Some(next) => dose_date = next,
                None => break,
            }
        }

        dates
    }
}

impl From<ScheduleConfig> for DosingSchedule {
    fn from(config: ScheduleConfig) -> Self {
        Self {
            name: config.name,
            amount: config.amount,
            dosing_period_days: config.dosing_period_days,
            start_date: config.start_date,
            end_date: config.end_date,
            half_life_hours: config.half_life_hours,
        }
    }
}
