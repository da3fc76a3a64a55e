use crate::export::PageExport;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid export directory: {0}")]
    InvalidExportDir(String),
}

/// Write content to a file relative to `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Write an exported page as Markdown into `output_dir`, creating the
/// directory if needed. Returns the path written.
pub fn write_export(export: &PageExport, output_dir: &Path) -> Result<PathBuf, IoError> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(IoError::InvalidExportDir(format!(
            "{} is not a directory",
            output_dir.display()
        )));
    }

    let relative_path = RelativePathBuf::from(export.file_name());
    write_file(&relative_path, output_dir, &export.to_markdown())?;

    let path = relative_path.to_path(output_dir);
    log::info!("Exported '{}' to {}", export.title, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_export_dir, create_test_file, sample_export};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_export_creates_named_file() {
        // Given an export directory and a page
        let dir = create_test_export_dir();
        let page = sample_export("Deploy Guide", "<p>Ship it</p>");

        // When writing the export
        let path = write_export(&page, dir.path()).unwrap();

        // Then the file is named after the title and holds the Markdown
        assert_eq!(path, dir.path().join("Deploy_Guide.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), page.to_markdown());
    }

    #[test]
    fn test_write_export_creates_missing_directory() {
        let dir = create_test_export_dir();
        let nested = dir.path().join("out/pages");

        let path = write_export(&sample_export("Notes", ""), &nested).unwrap();

        assert!(path.exists());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_write_export_rejects_file_as_directory() {
        let dir = create_test_export_dir();
        let file = create_test_file(&dir, "taken", "not a directory");

        let result = write_export(&sample_export("Notes", ""), &file);

        assert!(matches!(result, Err(IoError::InvalidExportDir(_))));
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = create_test_export_dir();
        let relative = RelativePath::new("nested/page.md");

        write_file(relative, dir.path(), "# Page").unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("nested/page.md")).unwrap(), "# Page");
    }
}
