//! Zone, block count and import file output.
//!
//! Every file is written to a temporary file next to its destination and
//! renamed into place, so readers never see a partially written file.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use nmczone_core::{ImportIntent, ZoneSerial};

/// Placeholder replaced with the zone serial.
pub const SERIAL_PLACEHOLDER: &str = "%%serial%%";

/// Render the complete zone text.
///
/// The template ends with a newline (one is added if missing), each line
/// follows newline-terminated, and the zone ends with a blank line.
pub fn render_zone<I>(template: &str, serial: ZoneSerial, lines: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut zone = template.replace(SERIAL_PLACEHOLDER, &serial.to_string());
    if !zone.ends_with('\n') {
        zone.push('\n');
    }

    for line in lines {
        zone.push_str(line.as_ref());
        zone.push('\n');
    }
    zone.push('\n');
    zone
}

/// Atomically write a rendered zone.
pub fn write_zone(path: &Path, zone: &str) -> Result<()> {
    atomic_write(path, zone.as_bytes())
        .with_context(|| format!("failed to write zone file {}", path.display()))
}

/// Record the block height the zone was generated at.
pub fn write_block_count(path: &Path, height: u64) -> Result<()> {
    atomic_write(path, height.to_string().as_bytes())
        .with_context(|| format!("failed to write block count file {}", path.display()))
}

/// Write import intents as a JSON array.
pub fn write_imports<'a, I>(path: &Path, imports: I) -> Result<()>
where
    I: IntoIterator<Item = &'a ImportIntent>,
{
    let imports: Vec<&ImportIntent> = imports.into_iter().collect();
    let mut json = serde_json::to_vec_pretty(&imports)?;
    json.push(b'\n');

    atomic_write(path, &json)
        .with_context(|| format!("failed to write imports file {}", path.display()))
}

fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serial(value: u64) -> ZoneSerial {
        ZoneSerial::new(value, 1).unwrap()
    }

    #[test]
    fn test_render_replaces_every_placeholder() {
        let zone = render_zone("; %%serial%%\n@ SOA ns. host. %%serial%% 1 2 3 4\n", serial(42), ["a"]);
        assert_eq!(zone, "; 42\n@ SOA ns. host. 42 1 2 3 4\na\n\n");
    }

    #[test]
    fn test_render_adds_missing_newline() {
        let zone = render_zone("$TTL 3600", serial(1), ["x.bit. IN A 1.2.3.4"]);
        assert_eq!(zone, "$TTL 3600\nx.bit. IN A 1.2.3.4\n\n");
    }

    #[test]
    fn test_render_empty_zone() {
        let zone = render_zone("", serial(1), Vec::<String>::new());
        assert_eq!(zone, "\n\n");
    }

    #[test]
    fn test_write_zone_and_block_count() {
        let dir = tempfile::tempdir().unwrap();
        let zonefile = dir.path().join("bit.zone");
        let block_count = dir.path().join("block_count");

        std::fs::write(&zonefile, "stale").unwrap();
        let zone = render_zone("%%serial%%\n", serial(7), ["a", "b"]);
        write_zone(&zonefile, &zone).unwrap();
        write_block_count(&block_count, 512_000).unwrap();

        assert_eq!(std::fs::read_to_string(&zonefile).unwrap(), "7\na\nb\n\n");
        assert_eq!(std::fs::read_to_string(&block_count).unwrap(), "512000");
    }

    #[test]
    fn test_write_imports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imports.json");
        let imports = [ImportIntent::new("d/lib", "www.shop.bit.")];

        write_imports(&path, &imports).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{ "import": "d/lib", "domain": "www.shop.bit." }])
        );
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("bit.zone");

        assert!(write_block_count(&path, 1).is_err());
        assert!(!path.exists());
    }
}
