// src/lib.rs

pub mod cli;
pub mod error;
pub mod html;
pub mod net;
pub mod params;
pub mod resolve;
pub mod runner;
pub mod store;
pub mod xlsx;
