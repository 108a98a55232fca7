use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use walkdir::WalkDir;

use crate::errors::{NarrationError, NarrationResult};

// @module: File and directory utilities

/// Suffix of generated narration files
pub const NARRATION_EXTENSION: &str = "tts.txt";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @generates: Output path for a narration file
    // @params: input_file, output_dir
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
    ) -> PathBuf {
        let input_file = input_file.as_ref();

        let stem = input_file.file_stem().unwrap_or_default();
        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(NARRATION_EXTENSION);

        output_dir.as_ref().join(output_filename)
    }

    /// Find Markdown files under a directory, sorted by path
    pub fn find_markdown_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case("md") {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a whole document as UTF-8
    pub fn read_document<P: AsRef<Path>>(path: P) -> NarrationResult<String> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| NarrationError::InputAccess {
            path: path.to_path_buf(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|_| NarrationError::InvalidEncoding {
            path: path.to_path_buf(),
        })
    }

    /// Write a document through a temporary file renamed into place on success
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> NarrationResult<()> {
        let path = path.as_ref();
        let output_error = |source: std::io::Error| NarrationError::OutputAccess {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(output_error)?;
        }

        let mut temp_file = Self::temp_file_in(parent).map_err(output_error)?;
        // Keep the mode of the file being replaced
        if let Ok(metadata) = fs::metadata(path) {
            temp_file
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(output_error)?;
        }
        temp_file.write_all(content.as_bytes()).map_err(output_error)?;
        temp_file.flush().map_err(output_error)?;
        temp_file.persist(path).map_err(|err| output_error(err.error))?;

        Ok(())
    }

    // @creates: Temp file with the mode a plain create would get (0666 minus umask)
    fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        builder.prefix(".mdnarrate").tempfile_in(dir)
    }
}
