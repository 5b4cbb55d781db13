use std::io;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use tempfile::TempDir;
use thiserror::Error;

use crate::utils;

#[derive(Debug, Error)]
pub enum RenderingError {
    #[error(transparent)]
    RunError(io::Error),
    #[error(transparent)]
    ReadOutputFile(io::Error),
}

/// Converts rendered html to a paginated pdf by invoking weasyprint in a
/// temporary working directory.
pub struct PdfRender {
    /// Path to the weasyprint executable.
    weasyprint_path: PathBuf,
    /// Temporary directory holding the staged input document.
    working_dir: TempDir,
    preserve_dir: Option<PathBuf>,
}

impl PdfRender {
    pub fn from_html(source: impl AsRef<[u8]>) -> anyhow::Result<Self> {
        let working_dir = TempDir::new()?;
        utils::write(working_dir.path().join("input.html"), source.as_ref())?;

        Ok(Self {
            weasyprint_path: "weasyprint".into(),
            working_dir,
            preserve_dir: None,
        })
    }

    pub fn preserve_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(path.into());
        self
    }

    pub fn weasyprint_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.weasyprint_path = path.into();
        self
    }

    pub fn render(self) -> anyhow::Result<Vec<u8>> {
        let input_file = self.working_dir.path().join("input.html");
        let output_file = self.working_dir.path().join("input.pdf");

        let mut cmd = Command::new(&self.weasyprint_path);
        cmd.arg(&input_file);
        cmd.arg(&output_file);
        cmd.current_dir(self.working_dir.path());

        let output = cmd.output().map_err(RenderingError::RunError)?;

        if !output.status.success() {
            if let Some(path) = self.preserve_dir {
                utils::create_dir_all(&path)?;
                fs_extra::dir::copy(
                    self.working_dir.path(),
                    &path,
                    &fs_extra::dir::CopyOptions {
                        overwrite: true,
                        skip_exist: false,
                        ..Default::default()
                    },
                )
                .with_context(|| {
                    format!(
                        "failed to copy `{}` to `{}`",
                        self.working_dir.path().display(),
                        path.display()
                    )
                })?;
            }

            return Err(anyhow::anyhow!(
                "weasyprint failed with status: {:?}, stdout: {}, stderr: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            ));
        }

        Ok(utils::read(output_file).map_err(RenderingError::ReadOutputFile)?)
    }
}
