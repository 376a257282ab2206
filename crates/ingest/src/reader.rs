//! CSV log readers
//!
//! Each reader walks the headered CSV once, decoding every row into its
//! event type. The first bad row aborts the file; the error carries the
//! 1-based data row number and what went wrong.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use csv::StringRecord;
use tracing::info;

use adlens_events::{
    AgeRange, BounceCriteria, CampaignState, Click, Context, EventStore, Gender, Impression,
    Income, Session,
};

use crate::error::{IngestError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read impressions from any CSV source
pub fn read_impressions<R: Read>(source: R) -> Result<Vec<Impression>> {
    let mut reader = csv::Reader::from_reader(source);
    let mut impressions = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record?;
        impressions.push(parse_impression(&record, row)?);
    }

    Ok(impressions)
}

/// Read clicks from any CSV source
pub fn read_clicks<R: Read>(source: R) -> Result<Vec<Click>> {
    let mut reader = csv::Reader::from_reader(source);
    let mut clicks = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record?;
        clicks.push(parse_click(&record, row)?);
    }

    Ok(clicks)
}

/// Read session records from any CSV source
pub fn read_sessions<R: Read>(source: R) -> Result<Vec<Session>> {
    let mut reader = csv::Reader::from_reader(source);
    let mut sessions = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record?;
        sessions.push(parse_session(&record, row)?);
    }

    Ok(sessions)
}

/// Load the impression log from a file
pub fn load_impressions<P: AsRef<Path>>(path: P) -> Result<Vec<Impression>> {
    read_impressions(open(path.as_ref())?)
}

/// Load the click log from a file
pub fn load_clicks<P: AsRef<Path>>(path: P) -> Result<Vec<Click>> {
    read_clicks(open(path.as_ref())?)
}

/// Load the server log from a file
pub fn load_sessions<P: AsRef<Path>>(path: P) -> Result<Vec<Session>> {
    read_sessions(open(path.as_ref())?)
}

/// Load all three logs into a fresh campaign state
///
/// Any malformed row in any file fails the whole load; the caller gets
/// either a complete campaign or none.
pub fn load_campaign<P: AsRef<Path>>(
    impressions: P,
    clicks: P,
    sessions: P,
    criteria: BounceCriteria,
) -> Result<CampaignState> {
    let mut store = EventStore::new();

    for impression in load_impressions(&impressions)? {
        store.push_impression(impression);
    }
    for click in load_clicks(&clicks)? {
        store.push_click(click);
    }
    for session in load_sessions(&sessions)? {
        store.push_session(session);
    }

    info!(
        impressions = store.impressions().len(),
        clicks = store.clicks().len(),
        sessions = store.sessions().len(),
        "campaign loaded"
    );

    Ok(CampaignState::new(store, criteria))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse_impression(record: &StringRecord, row: usize) -> Result<Impression> {
    const LOG: &str = "impression";

    let timestamp = parse_date(field(record, 0, LOG, row)?, LOG, row)?;
    let user_id = field(record, 1, LOG, row)?;
    let gender = Gender::parse(field(record, 2, LOG, row)?)
        .map_err(|e| IngestError::row(LOG, row, e.to_string()))?;
    let age = AgeRange::parse(field(record, 3, LOG, row)?)
        .map_err(|e| IngestError::row(LOG, row, e.to_string()))?;
    let income = Income::parse(field(record, 4, LOG, row)?)
        .map_err(|e| IngestError::row(LOG, row, e.to_string()))?;
    let context = Context::parse(field(record, 5, LOG, row)?)
        .map_err(|e| IngestError::row(LOG, row, e.to_string()))?;
    let cost = parse_cost(field(record, 6, LOG, row)?, LOG, row)?;

    Ok(Impression::new(
        timestamp, user_id, gender, age, income, context, cost,
    ))
}

fn parse_click(record: &StringRecord, row: usize) -> Result<Click> {
    const LOG: &str = "click";

    let timestamp = parse_date(field(record, 0, LOG, row)?, LOG, row)?;
    let user_id = field(record, 1, LOG, row)?;
    let cost = parse_cost(field(record, 2, LOG, row)?, LOG, row)?;

    Ok(Click::new(timestamp, user_id, cost))
}

fn parse_session(record: &StringRecord, row: usize) -> Result<Session> {
    const LOG: &str = "server";

    let entry = parse_date(field(record, 0, LOG, row)?, LOG, row)?;
    let exit = parse_optional_date(field(record, 1, LOG, row)?, LOG, row)?;
    let pages_viewed = parse_pages(field(record, 2, LOG, row)?, LOG, row)?;
    let conversion = parse_conversion(field(record, 3, LOG, row)?, LOG, row)?;
    let user_id = field(record, 4, LOG, row)?;

    if let Some(exit) = exit {
        if exit < entry {
            return Err(IngestError::row(LOG, row, "exit date before entry date"));
        }
    }

    Ok(Session::new(entry, exit, pages_viewed, conversion, user_id))
}

fn field<'r>(record: &'r StringRecord, index: usize, log: &'static str, row: usize) -> Result<&'r str> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| IngestError::row(log, row, format!("missing column {}", index + 1)))
}

fn parse_date(s: &str, log: &'static str, row: usize) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, DATE_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|_| {
            IngestError::row(
                log,
                row,
                format!("invalid date '{}' (expected yyyy-MM-dd HH:mm:ss)", s),
            )
        })
}

fn parse_optional_date(s: &str, log: &'static str, row: usize) -> Result<Option<DateTime<Utc>>> {
    if s.is_empty() || s.eq_ignore_ascii_case("n/a") {
        return Ok(None);
    }
    parse_date(s, log, row).map(Some)
}

fn parse_cost(s: &str, log: &'static str, row: usize) -> Result<f64> {
    let cost: f64 = s
        .parse()
        .map_err(|_| IngestError::row(log, row, format!("invalid cost '{}'", s)))?;
    if !cost.is_finite() || cost < 0.0 {
        return Err(IngestError::row(log, row, format!("negative cost '{}'", s)));
    }
    Ok(cost)
}

fn parse_pages(s: &str, log: &'static str, row: usize) -> Result<u32> {
    s.parse()
        .map_err(|_| IngestError::row(log, row, format!("invalid pages viewed '{}'", s)))
}

fn parse_conversion(s: &str, log: &'static str, row: usize) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" => Ok(false),
        _ => Err(IngestError::row(
            log,
            row,
            format!("invalid conversion flag '{}'", s),
        )),
    }
}
