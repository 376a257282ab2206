//! Adlens Log Ingestion
//!
//! CSV readers for the three campaign log formats:
//!
//! - Impression log: `Date,ID,Gender,Age,Income,Context,Impression Cost`
//! - Click log: `Date,ID,Click Cost`
//! - Server log: `Entry Date,Exit Date,Pages Viewed,Conversion,ID`
//!
//! Dates are `yyyy-MM-dd HH:mm:ss`. A blank (or `n/a`) exit date marks a
//! session still in progress. Loading fails fast: any malformed row aborts
//! the whole file with a row-numbered error, so a campaign is never
//! half-loaded.

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{
    load_campaign, load_clicks, load_impressions, load_sessions, read_clicks, read_impressions,
    read_sessions,
};
