// src/cli.rs

use std::env;

use chrono::{NaiveDate, NaiveDateTime};
use log::LevelFilter;

use crate::error::ScrapeError;
use crate::params::Params;
use crate::runner;

pub fn run() -> Result<(), ScrapeError> {
    let params = parse_cli()?;

    env_logger::Builder::new()
        .filter_level(params.log_level)
        .init();

    let record = runner::run(params.at)?;
    println!("Presence for {} captured: {}", record.date, record.presence);
    Ok(())
}

fn parse_cli() -> Result<Params, ScrapeError> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--at" => {
                let v = args
                    .next()
                    .ok_or_else(|| ScrapeError::BadArg("Missing value for --at".into()))?;
                params.at = Some(parse_moment(&v)?);
            }
            "--log-level" => {
                let v = args
                    .next()
                    .ok_or_else(|| ScrapeError::BadArg("Missing value for --log-level".into()))?;
                params.log_level = v
                    .parse::<LevelFilter>()
                    .map_err(|_| ScrapeError::BadArg(format!("Unknown log level: {v}")))?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(ScrapeError::BadArg(format!("Unknown arg: {a}"))),
        }
    }

    Ok(params)
}

/// Accept a full ISO-8601 timestamp or a bare calendar date.
fn parse_moment(s: &str) -> Result<NaiveDateTime, ScrapeError> {
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Ok(dt);
    }
    let date: NaiveDate = s.parse()?;
    Ok(date.and_time(chrono::NaiveTime::MIN))
}
