use std::path::{Path, PathBuf};
use rust_embed::RustEmbed;
use tokio::fs;
use crate::models::babel_config::{BabelConfig, BABEL_CONFIG_FILE};
use crate::models::project::ProjectDescriptor;
use crate::utils::config::TemplateSource;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::fs_utils::copy_dir_recursive;

/// Template tree bundled into the binary
#[derive(RustEmbed)]
#[folder = "templates/application-src/"]
pub struct ApplicationTemplate;

/// Write `.babelrc` and copy the template tree into `<project>/src`.
///
/// The config file is written first and is left in place if the copy fails.
pub async fn materialize(descriptor: &ProjectDescriptor, source: &TemplateSource) -> Result<usize> {
    write_babel_config(&descriptor.absolute_path).await?;

    let src_dir = descriptor.source_dir();
    let copied = match source {
        TemplateSource::Embedded => write_embedded_template(&src_dir).await?,
        TemplateSource::Directory(template_dir) => {
            copy_template_dir(template_dir.clone(), src_dir.clone()).await?
        }
    };

    tracing::info!(files = copied, dest = %src_dir.display(), "Template application created");
    Ok(copied)
}

async fn write_babel_config(project_dir: &Path) -> Result<()> {
    let content = serde_json::to_string(&BabelConfig::default())
        .map_err(|e| ScaffoldError::TemplateError(format!("Failed to serialize {BABEL_CONFIG_FILE}: {e}")))?;

    fs::write(project_dir.join(BABEL_CONFIG_FILE), content).await?;
    Ok(())
}

async fn write_embedded_template(dest: &Path) -> Result<usize> {
    let mut written = 0;

    for name in ApplicationTemplate::iter() {
        let file = ApplicationTemplate::get(&name).ok_or_else(|| {
            ScaffoldError::TemplateError(format!("Embedded template file missing: {name}"))
        })?;

        let target = dest.join(name.as_ref());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&target, file.data.as_ref()).await?;
        tracing::debug!(file = %name, "Wrote template file");
        written += 1;
    }

    if written == 0 {
        return Err(ScaffoldError::TemplateError("Embedded template is empty".to_string()));
    }

    Ok(written)
}

async fn copy_template_dir(template_dir: PathBuf, dest: PathBuf) -> Result<usize> {
    if !fs::metadata(&template_dir).await.is_ok_and(|meta| meta.is_dir()) {
        return Err(ScaffoldError::TemplateError(format!(
            "Template directory not found: {}",
            template_dir.display()
        )));
    }

    tokio::task::spawn_blocking(move || copy_dir_recursive(&template_dir, &dest))
        .await
        .map_err(|e| ScaffoldError::TemplateError(format!("Template copy task failed: {e}")))?
        .map_err(ScaffoldError::from)
}
