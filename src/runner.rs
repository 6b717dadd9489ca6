// src/runner.rs
// Top-level pipeline: fetch → resolve → merge → persist → export.
// Nothing is written unless a value was resolved, so a failed run leaves both
// the history file and the workbook exactly as they were.

use std::path::PathBuf;

use chrono::{NaiveDateTime, Utc};
use log::{error, info};

use crate::{
    error::ScrapeError,
    net,
    params::{DATA_DIR, HISTORY_FILE, PRESENCIA_URL, TICKER, TIMEZONE, WORKBOOK_FILE},
    resolve,
    store::{self, PresenceRecord},
    xlsx,
};

/// Run one full collection pass. `now` overrides the recorded moment;
/// by default the record is dated with today's date in America/Santiago.
pub fn run(now: Option<NaiveDateTime>) -> Result<PresenceRecord, ScrapeError> {
    let moment = now.unwrap_or_else(|| Utc::now().with_timezone(&TIMEZONE).naive_local());

    let html = match net::fetch_html(PRESENCIA_URL) {
        Ok(html) => html,
        Err(e) => {
            error!("Unable to retrieve presence information: {e}");
            return Err(e);
        }
    };

    let Some(presence) = resolve::extract_presence_value(&html, TICKER) else {
        error!("Presence value for {TICKER} could not be found in the downloaded page");
        return Err(ScrapeError::ValueNotFound {
            ticker: TICKER.into(),
        });
    };

    let record = PresenceRecord::from_datetime(moment, presence);
    let history_path = PathBuf::from(DATA_DIR).join(HISTORY_FILE);
    let workbook_path = PathBuf::from(DATA_DIR).join(WORKBOOK_FILE);

    let history = store::load_history(&history_path)?;
    let updated = store::merge_record(&history, record.clone());
    store::save_history(&updated, &history_path)?;
    xlsx::write_workbook(&updated, &workbook_path)?;

    info!(
        "Stored presence value {} for {}",
        record.presence, record.date
    );
    Ok(record)
}
