#[macro_use]
extern crate anyhow;

pub mod cli;
pub mod download;
pub mod error;
pub mod logging;
pub mod maven;
pub mod util;
