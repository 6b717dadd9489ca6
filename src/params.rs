// src/params.rs

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use log::LevelFilter;

// Source page
pub const PRESENCIA_URL: &str = "https://www.bolsadesantiago.com/presencia_bursatil";
pub const TICKER: &str = "INGVEC";

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/117.0 Safari/537.36";
pub const TIMEOUT_SECS: u64 = 30;

// Persisted artifacts
pub const DATA_DIR: &str = "data";
pub const HISTORY_FILE: &str = "presence_history.json";
pub const WORKBOOK_FILE: &str = "presencia_ingvec.xlsx";

// Civil timezone used to pick which calendar date "now" falls on
pub const TIMEZONE: Tz = chrono_tz::America::Santiago;

#[derive(Clone, Debug)]
pub struct Params {
    pub at: Option<NaiveDateTime>, // record at this moment instead of "now"
    pub log_level: LevelFilter,
}

impl Params {
    pub fn new() -> Self {
        Self {
            at: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
