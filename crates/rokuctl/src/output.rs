//! Rendering for `--output`: rounded tables, JSON, YAML, or bare
//! identifiers one per line for piping into other commands.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// `auto` colors only an interactive stdout, and `NO_COLOR` wins.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Highlight a name (key, app, device) when color is on.
pub fn accent(text: &str, color: bool) -> String {
    if color {
        text.cyan().bold().to_string()
    } else {
        text.to_owned()
    }
}

/// Dim secondary detail when color is on.
pub fn muted(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_owned()
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list: `to_row` feeds the table, `id_fn` the plain lines, and
/// the structured formats serialize `data` itself.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    if let Some(out) = serialize(format, data)? {
        return Ok(out);
    }
    Ok(if matches!(format, OutputFormat::Plain) {
        data.iter().map(id_fn).collect::<Vec<_>>().join("\n")
    } else {
        let rows: Vec<R> = data.iter().map(to_row).collect();
        Table::new(rows).with(Style::rounded()).to_string()
    })
}

/// Render one item. The table form is a key/value block from `detail_fn`.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    if let Some(out) = serialize(format, data)? {
        return Ok(out);
    }
    Ok(if matches!(format, OutputFormat::Plain) {
        id_fn(data)
    } else {
        detail_fn(data)
    })
}

/// Write to stdout unless `--quiet` or there is nothing to show.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let _ = writeln!(io::stdout().lock(), "{output}");
}

/// `None` for the human formats, which the caller renders itself.
fn serialize<T: serde::Serialize + ?Sized>(
    format: &OutputFormat,
    data: &T,
) -> Result<Option<String>, CliError> {
    Ok(Some(match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::Table | OutputFormat::Plain => return Ok(None),
    }))
}
