//! PNG export of the composed board.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Filename used when no explicit output path is given.
pub const DEFAULT_FILENAME: &str = "whiteboard_drawing.png";

/// Errors that can occur while exporting the board.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save export: {0}")]
    Io(#[from] std::io::Error),
}

/// Where [`save_png`] writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Directory to save exports to (created if missing).
    pub directory: PathBuf,
    /// Fixed export filename.
    pub filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl ExportSettings {
    /// Full destination path.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Encodes the surface as-is (background included) to PNG bytes.
pub fn encode_png(surface: &cairo::ImageSurface) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    surface.write_to_png(&mut buffer)?;
    log::debug!(
        "Encoded {}x{} surface to {} PNG bytes",
        surface.width(),
        surface.height(),
        buffer.len()
    );
    Ok(buffer)
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Saves the surface into the configured directory under the fixed filename,
/// overwriting any previous export.
pub fn save_png(
    surface: &cairo::ImageSurface,
    settings: &ExportSettings,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&settings.directory)?;
    write_png(surface, &directory.join(&settings.filename))
}

/// Saves the surface to an explicit path; parent directories are created.
pub fn save_png_to(surface: &cairo::ImageSurface, path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }
    write_png(surface, path)
}

fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<PathBuf, ExportError> {
    let bytes = encode_png(surface)?;

    log::info!("Saving export to: {} ({} bytes)", path.display(), bytes.len());
    fs::write(path, &bytes)?;

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(path.to_path_buf())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn test_surface() -> cairo::ImageSurface {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 16, 8).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        ctx.set_source_rgb(0.2, 0.2, 0.2);
        ctx.paint().unwrap();
        drop(ctx);
        surface
    }

    #[test]
    fn test_encode_png_has_signature() {
        let bytes = encode_png(&test_surface()).unwrap();
        assert!(bytes.len() > PNG_SIGNATURE.len());
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_save_png_uses_fixed_filename() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ExportSettings {
            directory: dir.path().join("nested"),
            filename: DEFAULT_FILENAME.to_string(),
        };

        let path = save_png(&test_surface(), &settings).unwrap();
        assert_eq!(path.file_name().unwrap(), DEFAULT_FILENAME);
        assert!(path.exists());

        // A second export overwrites the first.
        let again = save_png(&test_surface(), &settings).unwrap();
        assert_eq!(path, again);
    }

    #[test]
    fn test_saved_png_decodes_to_same_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_png_to(&test_surface(), &dir.path().join("board.png")).unwrap();

        let mut file = fs::File::open(&path).unwrap();
        let decoded = cairo::ImageSurface::create_from_png(&mut file).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_settings() {
        let settings = ExportSettings::default();
        assert_eq!(settings.path(), PathBuf::from(".").join(DEFAULT_FILENAME));
    }
}
