use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::Config;
use crate::pdf_render::PdfRender;
use crate::utils::{self, PathExt};

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to convert `{path}` to a pdf")]
    Convert {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Writes the rendered document to the configured output path, converting to
/// pdf first when the path calls for one. Missing parent directories are
/// created.
pub fn emit(rendered: &str, config: &Config) -> Result<(), EmitError> {
    let output = config.output();

    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        utils::create_dir_all(parent).map_err(|source| EmitError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents = if output.has_extension("pdf") {
        convert(rendered, config).map_err(|source| EmitError::Convert {
            path: output.to_path_buf(),
            source,
        })?
    } else {
        rendered.as_bytes().to_vec()
    };

    utils::write(output, contents).map_err(|source| EmitError::Write {
        path: output.to_path_buf(),
        source,
    })
}

fn convert(rendered: &str, config: &Config) -> anyhow::Result<Vec<u8>> {
    let mut renderer = PdfRender::from_html(rendered.as_bytes())?;

    if let Some(path) = config.weasyprint_path() {
        renderer.weasyprint_path(path);
    }

    if let Some(dir) = config.preserve_dir() {
        renderer.preserve_dir(dir);
    }

    renderer.render()
}
