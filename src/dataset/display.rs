//! Human-readable rendering of datasets

use std::fmt::Write;

use super::Dataset;

/// Description length used by summary listings unless told otherwise
pub const DEFAULT_SUMMARY_DESCRIPTION_LEN: usize = 80;

/// How much of a dataset to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Name, creator, rights and a truncated description
    Summary { max_description_len: usize },

    /// Every field followed by one line per tag
    Detail,
}

/// Render a dataset as an indented text block ending in a newline
pub fn render(dataset: &Dataset, mode: DisplayMode) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_block(&mut out, dataset, mode);
    out
}

fn write_block(out: &mut String, ds: &Dataset, mode: DisplayMode) -> std::fmt::Result {
    writeln!(out, "[{}] {}", ds.id, ds.name)?;

    match mode {
        DisplayMode::Summary { max_description_len } => {
            writeln!(out, "  Creator     : {}", ds.creator)?;
            writeln!(out, "  Rights      : {}", ds.rights)?;
            if ds.description.chars().count() > max_description_len {
                let head: String = ds.description.chars().take(max_description_len).collect();
                writeln!(out, "  Description : {}...[more]", head)?;
            } else {
                writeln!(out, "  Description : {}", ds.description)?;
            }
        }
        DisplayMode::Detail => {
            writeln!(out, "  Name        : {}", ds.name)?;
            writeln!(out, "  Creator     : {}", ds.creator)?;
            writeln!(out, "  Host        : {}", ds.host)?;
            writeln!(out, "  Description : {}", ds.description)?;
            writeln!(out, "  Rights      : {}", ds.rights)?;
            writeln!(out, "  URL         : {}", ds.url)?;
            for (key, value) in &ds.tags {
                writeln!(out, "  {:<12}: {}", key, value)?;
            }
        }
    }

    Ok(())
}
