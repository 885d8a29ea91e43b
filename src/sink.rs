//! Result output: console or text file

use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::entities::PokedexObject;
use crate::error::{Error, Result};
use crate::types::Output;

/// Write every entry's rendering to `output`, in order
///
/// Each rendering is followed by a newline, so consecutive entries are
/// separated by a blank line.
pub async fn emit<E: PokedexObject>(entries: &[E], output: &Output) -> Result<()> {
    match output {
        Output::Print => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_entries(&mut lock, entries)?;
            lock.flush()?;
        }
        Output::File(path) => write_file(path, entries).await?,
    }
    Ok(())
}

/// Write the renderings of `entries` to any writer
pub fn write_entries<W: Write, E: PokedexObject>(writer: &mut W, entries: &[E]) -> Result<()> {
    for entry in entries {
        writeln!(writer, "{}", entry.render())?;
    }
    Ok(())
}

/// All renderings as one string, as they would be written to a file
pub fn render_all<E: PokedexObject>(entries: &[E]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n", entry.render()))
        .collect()
}

async fn write_file<E: PokedexObject>(path: &Path, entries: &[E]) -> Result<()> {
    tokio::fs::write(path, render_all(entries)).await.map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write output file '{}': {}", path.display(), e),
        ))
    })?;

    info!(path = %path.display(), count = entries.len(), "wrote results");
    Ok(())
}
