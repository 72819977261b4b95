/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use super::fetch_company;
use crate::config::Config;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use colored::Colorize;
use fa_models::format::{format_price, format_ratio};
use fa_models::CompanyFundamentals;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug)]
pub struct WatchlistCommand {
  #[command(subcommand)]
  command: WatchlistSubcommands,
}

#[derive(Subcommand, Debug)]
enum WatchlistSubcommands {
  /// Look up a company and save the snapshot
  Add {
    /// Ticker symbol to add
    ticker: String,
  },

  /// Remove a saved company
  Remove {
    /// Symbol to remove (case-insensitive)
    symbol: String,
  },

  /// List saved companies
  List,
}

/// One saved company snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
  pub added_at: DateTime<Utc>,
  pub company: CompanyFundamentals,
}

/// JSON-file backed watchlist
pub struct WatchlistStore {
  path: PathBuf,
}

impl WatchlistStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Saved entries in insertion order; a missing file is an empty watchlist.
  pub fn load(&self) -> Result<Vec<WatchlistEntry>> {
    let contents = match fs::read_to_string(&self.path) {
      Ok(contents) => contents,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
      Err(e) => {
        return Err(e).with_context(|| format!("Failed to read {}", self.path.display()));
      }
    };

    serde_json::from_str(&contents)
      .with_context(|| format!("Failed to parse watchlist {}", self.path.display()))
  }

  pub fn save(&self, entries: &[WatchlistEntry]) -> Result<()> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(entries)?;
    fs::write(&self.path, json).with_context(|| format!("Failed to write {}", self.path.display()))
  }

  pub fn contains(&self, symbol: &str) -> Result<bool> {
    Ok(self.load()?.iter().any(|entry| entry.company.symbol.eq_ignore_ascii_case(symbol.trim())))
  }

  /// Append `company`; returns false and leaves the file alone if its symbol is already saved.
  pub fn add(&self, company: CompanyFundamentals) -> Result<bool> {
    let mut entries = self.load()?;
    if entries.iter().any(|entry| entry.company.symbol == company.symbol) {
      return Ok(false);
    }

    entries.push(WatchlistEntry { added_at: Utc::now(), company });
    self.save(&entries)?;
    Ok(true)
  }

  /// Remove every entry matching `symbol`, ignoring case; returns whether anything was removed.
  pub fn remove(&self, symbol: &str) -> Result<bool> {
    let mut entries = self.load()?;
    let before = entries.len();
    entries.retain(|entry| !entry.company.symbol.eq_ignore_ascii_case(symbol.trim()));

    if entries.len() == before {
      return Ok(false);
    }
    self.save(&entries)?;
    Ok(true)
  }
}

pub async fn execute(cmd: WatchlistCommand, config: Config) -> Result<()> {
  let store = WatchlistStore::new(&config.watchlist_path);
  debug!("Using watchlist at {}", store.path().display());

  match cmd.command {
    WatchlistSubcommands::Add { ticker } => {
      if store.contains(&ticker)? {
        println!("{} is already in your watchlist", ticker.trim().to_uppercase());
        return Ok(());
      }

      let company = fetch_company(&ticker, &config).await?;
      let symbol = company.symbol.clone();
      let name = company.name.clone();
      if store.add(company)? {
        println!("{} Added {} ({})", "✓".green(), symbol.bold(), name);
      } else {
        println!("{} is already in your watchlist", symbol);
      }
    }
    WatchlistSubcommands::Remove { symbol } => {
      if store.remove(&symbol)? {
        println!("{} Removed {}", "✓".green(), symbol.trim().to_uppercase().bold());
      } else {
        println!("{} is not in your watchlist", symbol.trim().to_uppercase());
      }
    }
    WatchlistSubcommands::List => print!("{}", render_list(&store.load()?)),
  }

  Ok(())
}

/// Symbol, name, forward P/E and price target of every saved company
pub fn render_list(entries: &[WatchlistEntry]) -> String {
  if entries.is_empty() {
    return "Your watchlist is empty\n".to_string();
  }

  let mut out = format!("{} saved companies\n", entries.len());
  for entry in entries {
    let company = &entry.company;
    let mut line = format!("{} {}", format!("{:<8}", company.symbol).bold(), company.name);
    if company.forward_pe.is_some() {
      line.push_str(&format!("  Forward P/E: {}", format_ratio(company.forward_pe)));
    }
    if company.price_target.is_some() {
      line.push_str(&format!("  Target: {}", format_price(company.price_target)));
    }
    out.push_str(&line);
    out.push('\n');
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn company(symbol: &str, forward_pe: Option<f64>) -> CompanyFundamentals {
    let mut company = CompanyFundamentals::empty(symbol);
    company.name = format!("{} Corp", symbol);
    company.forward_pe = forward_pe;
    company
  }

  #[test]
  fn test_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = WatchlistStore::new(dir.path().join("watchlist.json"));

    assert!(store.load().unwrap().is_empty());
    assert!(!store.contains("AAPL").unwrap());
  }

  #[test]
  fn test_add_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = WatchlistStore::new(dir.path().join("data").join("nested").join("watchlist.json"));

    assert!(store.add(company("AAPL", Some(28.3))).unwrap());
    assert!(store.path().exists());

    let entries = store.load().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].company.symbol, "AAPL");
    assert_eq!(entries[0].company.forward_pe, Some(28.3));
  }

  #[test]
  fn test_add_existing_symbol_is_noop() {
    let dir = TempDir::new().unwrap();
    let store = WatchlistStore::new(dir.path().join("watchlist.json"));

    assert!(store.add(company("AAPL", Some(28.3))).unwrap());
    assert!(!store.add(company("AAPL", Some(30.0))).unwrap());
    assert!(store.add(company("MSFT", None)).unwrap());

    let entries = store.load().unwrap();
    let symbols: Vec<&str> = entries.iter().map(|e| e.company.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    assert_eq!(entries[0].company.forward_pe, Some(28.3));
  }

  #[test]
  fn test_remove_ignores_case() {
    let dir = TempDir::new().unwrap();
    let store = WatchlistStore::new(dir.path().join("watchlist.json"));
    store.add(company("AAPL", None)).unwrap();
    store.add(company("MSFT", None)).unwrap();

    assert!(store.remove("aapl").unwrap());
    assert!(!store.remove("aapl").unwrap());
    assert!(store.contains("msft").unwrap());
    assert_eq!(store.load().unwrap().len(), 1);
  }

  #[test]
  fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("watchlist.json");
    fs::write(&path, "not json").unwrap();

    assert!(WatchlistStore::new(path).load().is_err());
  }

  #[test]
  fn test_render_list() {
    colored::control::set_override(false);
    assert_eq!(render_list(&[]), "Your watchlist is empty\n");

    let mut apple = company("AAPL", Some(28.3));
    apple.price_target = Some(210.0);
    let entries = vec![
      WatchlistEntry { added_at: Utc::now(), company: apple },
      WatchlistEntry { added_at: Utc::now(), company: company("XYZ", None) },
    ];

    let listing = render_list(&entries);
    assert!(listing.starts_with("2 saved companies\n"));
    assert!(listing.contains("AAPL     AAPL Corp  Forward P/E: 28.30  Target: $210.00\n"));
    assert!(listing.contains("XYZ      XYZ Corp\n"));
  }
}
