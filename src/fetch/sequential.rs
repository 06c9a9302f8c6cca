use std::io::Write;

use tracing::debug;

use super::page::FetchedPage;
use crate::error::FetchError;

/// Blocking one-shot GET. Each call builds its own client, so nothing is reused
/// between URLs.
pub fn fetch_blocking(url: &str) -> Result<FetchedPage, FetchError> {
    debug!(url, "fetching");
    let body = reqwest::blocking::get(url)?.text()?;
    let page = FetchedPage::new(url, body);
    debug!(url, chars = page.char_len(), "fetched");
    Ok(page)
}

/// Fetches `urls` one at a time, writing a line per URL as soon as it lands.
///
/// The first failure stops the run; lines already written stay written.
pub fn run_sequential<W: Write>(urls: &[String], out: &mut W) -> Result<Vec<usize>, FetchError> {
    let mut counts = Vec::with_capacity(urls.len());

    for url in urls {
        let page = fetch_blocking(url)?;
        writeln!(out, "{}", page.sequential_line())?;
        counts.push(page.char_len());
    }

    Ok(counts)
}
