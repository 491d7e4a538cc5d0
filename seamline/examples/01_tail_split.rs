use std::sync::Arc;

use chrono::{DateTime, Utc};
use seamline::{FixedClock, Seamline, SplitStrategy, TimeSeries, TimeSeriesItem, TimeSeriesMeta};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // Ten one-minute buckets; "now" sits four minutes after the last bucket started.
    let minute = 60_000;
    let start = 1_729_000_000_000;
    let now = start + 13 * minute;
    let values = (0..10)
        .map(|i| -> Result<TimeSeriesItem, &'static str> {
            let ts = DateTime::<Utc>::from_timestamp_millis(start + i * minute)
                .ok_or("timestamp out of range")?;
            Ok(TimeSeriesItem::new(ts, Some(120.0 + (i as f64).sin() * 15.0)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let series = TimeSeries {
        y_axis: "p99(span.duration)".into(),
        values,
        meta: TimeSeriesMeta {
            interval: minute,
            value_type: "duration".into(),
            value_unit: Some("millisecond".into()),
        },
    };

    let clock = FixedClock::from_millis(now).ok_or("clock out of range")?;
    for strategy in [SplitStrategy::Stitched, SplitStrategy::Binary] {
        let seamline = Seamline::builder()
            .ingestion_delay_secs(5 * 60)
            .split_strategy(strategy)
            .clock(Arc::new(clock))
            .build()?;

        println!("{strategy:?}:");
        for (part, incomplete) in seamline.segments(series.clone())? {
            let style = if incomplete { "dashed" } else { "solid" };
            let first = part.values.first().map(|v| v.timestamp);
            let last = part.values.last().map(|v| v.timestamp);
            println!(
                "  {style:>6} line, {} points, {:?} .. {:?}",
                part.len(),
                first,
                last
            );
        }
    }
    Ok(())
}
