use std::io::Write;

use console::measure_text_width;
use nu_ansi_term::Color::{Green, Yellow};

use crate::error::*;
use crate::library::CharLibrary;

const CHARACTER_HEADER: &str = "Character";
const VARIANTS_HEADER: &str = "Variants";
const COUNT_HEADER: &str = "Count";

/// Prints the library contents as a table of character, variants and
/// variant count, followed by the total number of entries.
///
/// # Arguments
/// * `library` - The library to display
/// * `filter` - Restricts the table to a single character when present
/// * `colored` - Paints the header and the totals line
/// * `output` - Where the table is written
///
/// # Returns
/// `Ok(false)` if the filter matched no entry, `Ok(true)` otherwise.
pub fn display_library(
    library: &CharLibrary,
    filter: Option<char>,
    colored: bool,
    output: &mut dyn Write,
) -> Result<bool> {
    let rows: Vec<(String, String, String)> = library
        .entries()
        .filter(|(c, _)| filter.map_or(true, |f| f == *c))
        .map(|(c, variants)| (c.to_string(), variants.join(" "), variants.len().to_string()))
        .collect();

    if rows.is_empty() {
        if let Some(c) = filter {
            let message = format!("Character \"{}\" not found in library", c);
            writeln!(output, "{}", paint(colored, Yellow, &message))?;
        }
        return Ok(false);
    }

    let char_width = column_width(CHARACTER_HEADER, rows.iter().map(|r| r.0.as_str()));
    let variants_width = column_width(VARIANTS_HEADER, rows.iter().map(|r| r.1.as_str()));

    let header = format!(
        "{}  {}  {}",
        pad_to(CHARACTER_HEADER, char_width),
        pad_to(VARIANTS_HEADER, variants_width),
        COUNT_HEADER
    );
    writeln!(output, "{}", paint(colored, Green, &header))?;

    for (c, variants, count) in &rows {
        writeln!(
            output,
            "{}  {}  {}",
            pad_to(c, char_width),
            pad_to(variants, variants_width),
            count
        )?;
    }

    let total = format!("Total: {} characters", library.len());
    writeln!(output, "{}", paint(colored, Yellow, &total))?;
    Ok(true)
}

fn paint(colored: bool, color: nu_ansi_term::Color, text: &str) -> String {
    if colored {
        color.paint(text).to_string()
    } else {
        text.to_string()
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(measure_text_width)
        .chain(std::iter::once(measure_text_width(header)))
        .max()
        .unwrap_or(0)
}

/// Pads `text` with spaces up to `width` visible columns
fn pad_to(text: &str, width: usize) -> String {
    let visible = measure_text_width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(visible)))
}
