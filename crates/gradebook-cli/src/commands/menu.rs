//! The interactive `gradebook` menu.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use gradebook_core::config::load_config_from;
use gradebook_core::roster::Roster;

use crate::session::Session;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let roster = Roster::new(config.scale()?);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        roster,
        config.average_decimals,
        stdin.lock(),
        stdout.lock(),
    );
    session.run().context("terminal I/O failed")?;

    Ok(())
}
