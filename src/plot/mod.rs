//! Self-contained HTML pages rendering the analysis with plotly.js.
//!
//! Pages are produced by placeholder substitution on static templates, with
//! all data embedded as JSON. No server, no template engine; the only
//! external reference is the plotly.js CDN script.

pub mod regression;
pub mod scatter;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub(crate) fn write_html(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating parent directory of {:?}", path))?;
    }
    fs::write(path, contents).with_context(|| format!("writing {:?}", path))
}
