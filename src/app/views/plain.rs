//! Non-interactive listing for pipes and `--plain`.

use super::HEADER_TEXT;
use crate::app::models::ListView;
use crate::app::utils::{truncate_name, ELLIPSIS};
use anyhow::Result;
use std::io::Write;

/// Print the list one card per line: name column, then `status - gender`.
pub fn render_plain<W: Write>(out: &mut W, view: &ListView<'_>, name_width: usize) -> Result<()> {
    writeln!(out, "{HEADER_TEXT}")?;
    if view.filter_active {
        writeln!(out, "(male & alive only)")?;
    }
    writeln!(out)?;

    if view.loading {
        writeln!(out, "Loading...")?;
        return Ok(());
    }

    let column = name_width + ELLIPSIS.len();
    for character in view.characters {
        let name = truncate_name(&character.name, name_width);
        writeln!(
            out,
            "{name:<column$}  {} - {}",
            character.status, character.gender
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{} characters", view.characters.len())?;
    out.flush()?;
    Ok(())
}
