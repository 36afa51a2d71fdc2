//! Convert markdown with the site's lightweight converter

use anyhow::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::content::MarkdownLite;

/// Convert `file`, or standard input when absent, and print the markup
pub fn run(file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    println!("{}", MarkdownLite::render(&text));
    Ok(())
}
