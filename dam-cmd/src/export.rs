//! CSV export to disk.

use dam_core::{Dashboard, DashboardEvent, DashboardOutput};
use log::info;
use std::io::Write;
use std::path::Path;

/// Export the dataset and write it to `path`, the same bytes the web app
/// offers through "Download Data".
pub fn run_export<W: Write>(dashboard: &Dashboard, path: &Path, out: &mut W) -> anyhow::Result<()> {
    let file = match dashboard.handle(DashboardEvent::ExportClicked)? {
        DashboardOutput::Download(file) => file,
        other => anyhow::bail!("Export produced unexpected output: {:?}", other),
    };

    std::fs::write(path, &file.bytes)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;

    info!("Export complete. Output: {}", path.display());
    writeln!(
        out,
        "Wrote {} rows to {}",
        dashboard.data().len(),
        path.display()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dam_core::data_source::DataSource;

    #[test]
    fn test_export_writes_file() {
        let dashboard = Dashboard::sample().unwrap();
        let path = std::env::temp_dir().join(format!("dam-cmd-export-{}.csv", std::process::id()));
        let mut out = Vec::new();

        run_export(&dashboard, &path, &mut out).unwrap();

        let reloaded = DataSource::from_path(&path).unwrap();
        assert_eq!(&reloaded, dashboard.data());
        assert!(String::from_utf8(out).unwrap().starts_with("Wrote 8 rows to "));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dashboard = Dashboard::sample().unwrap();
        let mut out = Vec::new();
        let result = run_export(&dashboard, Path::new("/nonexistent/dir/my_data.csv"), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
