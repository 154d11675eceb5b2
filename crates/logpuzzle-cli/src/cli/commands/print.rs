//! `logpuzzle LOGFILE` – print the ordered puzzle URLs.

use anyhow::Result;
use logpuzzle_core::extract::read_urls;
use std::io::Write;
use std::path::Path;

pub fn run_print<W: Write>(logfile: &Path, out: &mut W) -> Result<()> {
    let urls = read_urls(logfile)?;
    if !urls.is_empty() {
        writeln!(out, "{}", urls.join("\n"))?;
    }
    out.flush()?;
    Ok(())
}
