//! Loading the candidate station-name list.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Ordered list of candidate station names, one per input line, trimmed of
/// surrounding whitespace. Guaranteed non-empty.
///
/// The whole list is materialized in memory. That is fine for the small city
/// lists this tool is fed; it is not meant for multi-gigabyte name files.
#[derive(Debug)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Read a name list from a text file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read name list: {}", path.display()))?;
        Self::from_text(&text).with_context(|| format!("invalid name list: {}", path.display()))
    }

    /// Parse a name list from text, one name per line.
    ///
    /// Lines are trimmed but never filtered: a blank line becomes a valid
    /// zero-length name. Zero lines overall is an error, since sampling from
    /// an empty list is undefined.
    pub fn from_text(text: &str) -> Result<Self> {
        let names: Vec<String> = text.lines().map(|line| line.trim().to_string()).collect();
        if names.is_empty() {
            bail!("name list contains no names");
        }
        Ok(Self(names))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let list = NameList::from_text("  Oslo \n\tCairo\n").unwrap();
        assert_eq!(list.as_slice(), ["Oslo", "Cairo"]);
    }

    #[test]
    fn preserves_input_order_and_duplicates() {
        let list = NameList::from_text("Oslo\nCairo\nOslo\n").unwrap();
        assert_eq!(list.as_slice(), ["Oslo", "Cairo", "Oslo"]);
    }

    #[test]
    fn blank_line_becomes_empty_name() {
        let list = NameList::from_text("Oslo\n   \nCairo\n").unwrap();
        assert_eq!(list.as_slice(), ["Oslo", "", "Cairo"]);
    }

    #[test]
    fn handles_crlf_and_missing_final_newline() {
        let list = NameList::from_text("Oslo\r\nCairo").unwrap();
        assert_eq!(list.as_slice(), ["Oslo", "Cairo"]);
    }

    #[test]
    fn empty_text_is_an_error() {
        let err = NameList::from_text("").unwrap_err();
        assert!(err.to_string().contains("no names"));
    }

    #[test]
    fn single_newline_is_one_empty_name() {
        let list = NameList::from_text("\n").unwrap();
        assert_eq!(list.as_slice(), [""]);
    }
}
