use anyhow::Result;
use jar_install::{cli::run, logging::init_logging};

pub fn main() -> Result<()> {
    init_logging()?;
    run()
}
