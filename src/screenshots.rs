use std::{fs, path::Path};

use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose::STANDARD as B64};
use glob::glob;

/// One reference screenshot, attached in full to every chunk request.
#[derive(Debug)]
pub struct Screenshot {
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Screenshot {
    /// Inline `data:` URL for an OpenAI `image_url` content part.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, B64.encode(&self.bytes))
    }
}

fn mime_for(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => Some("image/png"),
        Some("jpg") => Some("image/jpeg"),
        _ => None,
    }
}

/// Load every `.png` and `.jpg` file from the screenshots directory, in
/// filename order. Other files are ignored. The directory itself must exist,
/// even if it is empty.
pub fn load_screenshots(dir: &Path) -> Result<Vec<Screenshot>> {
    if !dir.is_dir() {
        anyhow::bail!("Screenshots directory {} not found", dir.display());
    }

    let pattern = dir.join("*");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Non-UTF-8 screenshots path {}", dir.display()))?;

    let mut screenshots = Vec::new();
    for entry in glob(pattern)? {
        let path = entry?;
        let Some(mime) = mime_for(&path) else {
            continue;
        };
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read screenshot {}", path.display()))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        screenshots.push(Screenshot { name, mime, bytes });
    }

    Ok(screenshots)
}
