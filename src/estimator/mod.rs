use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use log::debug;

use crate::schedule::DosingSchedule;

/// Days plotted past the cycle end to show post-cycle clearance.
const CLEARANCE_TAIL_DAYS: u64 = 28;

/// Chart palette, assigned round-robin in series emission order.
const PALETTE: [&str; 6] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b4", "#59a14f", "#edc948",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One compound's aggregated active-amount curve, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundSeries {
    pub name: String,
    pub color: String,
    pub data: Vec<DataPoint>,
}

/// Estimate active amount remaining per compound over the cycle.
///
/// Produces one series per distinct schedule name, in first-seen order,
/// sampled daily from `cycle_start` through `cycle_end + 28 days`. Each
/// dose at or before a sampled date contributes
/// `amount * 0.5^(hours_since_dose / half_life_hours)`; contributions
/// from all schedules sharing a name are summed pointwise.
///
/// Pure function over its inputs: no I/O, no shared state, and it never
/// fails. Schedules with a non-positive or non-finite half-life (or a
/// non-finite amount) contribute zero rather than propagating NaN.
pub fn compute_series(
    schedules: &[DosingSchedule],
    cycle_start: NaiveDate,
    cycle_end: NaiveDate,
) -> Vec<CompoundSeries> {
    let plot_end = cycle_end
        .checked_add_days(Days::new(CLEARANCE_TAIL_DAYS))
        .unwrap_or(cycle_end);
    let dates = date_range(cycle_start, plot_end);

    let buckets = group_by_name(schedules);
    debug!(
        "Computing {} series over {} plotted days",
        buckets.len(),
        dates.len()
    );

    buckets
        .into_iter()
        .enumerate()
        .map(|(index, (name, bucket))| {
            let data = dates
                .iter()
                .map(|&d| DataPoint {
                    date: d,
                    value: active_amount_at(&bucket, d),
                })
                .collect();

            CompoundSeries {
                name,
                color: PALETTE[index % PALETTE.len()].to_string(),
                data,
            }
        })
        .collect()
}

/// Calendar dates from `start` to `end` inclusive, one per day. Empty
/// when `start > end`, so a malformed window cannot loop.
fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Group schedules by display name, preserving first-seen order so the
/// series emission order (and palette assignment) is deterministic.
fn group_by_name(schedules: &[DosingSchedule]) -> Vec<(String, Vec<&DosingSchedule>)> {
    let mut buckets: Vec<(String, Vec<&DosingSchedule>)> = Vec::new();

    for schedule in schedules {
        match buckets.iter_mut().find(|(name, _)| *name == schedule.name) {
            Some((_, bucket)) => bucket.push(schedule),
            None => buckets.push((schedule.name.clone(), vec![schedule])),
        }
    }

    buckets
}

/// Total active amount on `date` from every dose of every schedule in
/// the bucket administered at or before that date.
fn active_amount_at(bucket: &[&DosingSchedule], date: NaiveDate) -> f64 {
    let mut total = 0.0;

    for schedule in bucket {
        if !schedule.half_life_hours.is_finite() || schedule.half_life_hours <= 0.0 {
            // Treated as instant full clearance.
            continue;
        }
        if !schedule.amount.is_finite() {
            continue;
        }

        for dose_date in schedule.dose_dates_through(date) {
            let hours_since = (date - dose_date).num_days() as f64 * 24.0;
            total += schedule.amount * 0.5_f64.powf(hours_since / schedule.half_life_hours);
        }
    }

    total.max(0.0)
}
