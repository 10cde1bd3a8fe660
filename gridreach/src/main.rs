use std::io::{self, Write};

use clap::Parser;
use gridreach_lib::{Cli, logging, run};

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}
