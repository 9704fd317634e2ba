use chrono::NaiveDate;
use csv::Reader;
use indicator_core::common::date::parse_date;
use indicator_core::plan::lookback;
use indicator_core::series::range;
use indicator_core::{Bar, IndicatorBatch, IndicatorEngine, PriceSeries};
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Serialize)]
struct Report {
    start: NaiveDate,
    end: NaiveDate,
    extended_start: NaiveDate,
    lookback_periods: usize,
    bars: Vec<Bar>,
    indicators: IndicatorBatch,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        eprintln!(
            "usage: {} <ohlc.csv> <start-date> <end-date> <indicator-spec>...",
            args[0]
        );
        eprintln!("example: {} prices.csv 2024-01-01 2024-03-01 'macd(12,26,9)' 'ma(20)'", args[0]);
        std::process::exit(2);
    }

    let start = parse_date(&args[2])?;
    let end = parse_date(&args[3])?;
    let specs = &args[4..];

    // Plan the fetch window before touching price data, then clip the CSV
    // to it: the file stands in for the external data provider.
    let periods = lookback::required_periods(specs);
    let extended_start = lookback::extended_start(start, periods);

    let mut bars = read_csv_file(Path::new(&args[1]))?;
    bars.sort_by_key(|b| b.date);
    bars.retain(|b| b.date >= extended_start && b.date <= end);
    let series = PriceSeries::from_bars(bars)?;

    let engine = IndicatorEngine::from_specs(specs)?;
    let batch = engine.compute(&series);
    let (bars, indicators) = range::restrict(&series, &batch, start, end);

    println!("Computed {} indicator(s) over {} bar(s)", indicators.entries.len(), bars.len());
    let report = Report {
        start,
        end,
        extended_start,
        lookback_periods: periods,
        bars: bars.bars().to_vec(),
        indicators,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn read_csv_file(path: &Path) -> Result<Vec<Bar>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);
    let mut bars = Vec::new();

    for result in rdr.records() {
        let record = result?;
        bars.push(parse_csv_record(&record)?);
    }

    Ok(bars)
}

fn parse_csv_record(record: &csv::StringRecord) -> Result<Bar, Box<dyn Error>> {
    Ok(Bar {
        date: parse_date(&record[0])?,
        open: record[1].parse()?,
        high: record[2].parse()?,
        low: record[3].parse()?,
        close: record[4].parse()?,
        volume: record[5].parse()?,
    })
}
