use crate::estimator::CompoundSeries;
use crate::error::CycleResult;
use std::path::Path;
use std::fs::File;
use log::info;

pub fn save_series<P: AsRef<Path>>(series: &[CompoundSeries], output_dir: P) -> CycleResult<()> {
    let output_path = output_dir.as_ref();

    // Long-format series data for spreadsheets
    save_series_csv(series, &output_path.join("series.csv"))?;

    // Chart-ready JSON, one entry per compound
    save_series_json(series, &output_path.join("series.json"))?;

    // Per-compound peak summary
    save_peaks(series, &output_path.join("peaks.csv"))?;

    info!("All results saved to {:?}", output_path);
    Ok(())
}

fn save_series_csv<P: AsRef<Path>>(series: &[CompoundSeries], path: P) -> CycleResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["COMPOUND", "DATE", "ACTIVE_AMOUNT"])?;

    for s in series {
        for point in &s.data {
            writer.write_record(&[
                s.name.clone(),
                point.date.to_string(),
                point.value.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn save_series_json<P: AsRef<Path>>(series: &[CompoundSeries], path: P) -> CycleResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, series)?;
    Ok(())
}

fn save_peaks<P: AsRef<Path>>(series: &[CompoundSeries], path: P) -> CycleResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["COMPOUND", "PEAK_AMOUNT", "PEAK_DATE"])?;

    for s in series {
        let peak = s.data.iter()
            .max_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(peak) = peak {
            writer.write_record(&[
                s.name.clone(),
                peak.value.to_string(),
                peak.date.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
