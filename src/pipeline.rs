use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    catalogs::{self, Catalog},
    configs::{AppConfig, SOURCE_LANG},
    screenshots,
    translators::Translator,
};

#[derive(Debug)]
pub struct CatalogStats {
    pub messages: usize,
    pub chunks: usize,
}

/// First pass: translate the message catalog chunk by chunk, strictly in
/// order, and write the merged result. Nothing is written until every chunk
/// has been translated and verified, so a failure leaves no output file.
pub async fn translate_catalog(
    config: &AppConfig,
    translator: &dyn Translator,
    lang_code: &str,
    lang_name: &str,
) -> Result<CatalogStats> {
    let source_path = config.translation.messages_path(SOURCE_LANG);
    let target_path = config.translation.messages_path(lang_code);

    let catalog = catalogs::load_catalog(&source_path)?;
    let screenshots = screenshots::load_screenshots(&config.translation.screenshots_dir())?;
    let chunks = catalogs::chunk_catalog(&catalog, config.translation.chunk_size);

    println!(
        "Starting translation to {lang_code}. Total chunks: {}",
        chunks.len()
    );

    let pb = ProgressBar::new(chunks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} chunks ({msg})")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut translated = Catalog::new();
    for (index, chunk) in chunks.iter().enumerate() {
        pb.set_message(format!("{} strings", chunk.len()));

        let result = translator
            .translate_chunk(lang_name, chunk, &screenshots)
            .await
            .with_context(|| format!("Failed to translate chunk {}/{}", index + 1, chunks.len()))?;

        catalogs::check_key_parity(chunk, &result).with_context(|| {
            format!(
                "Chunk {}/{} returned a mismatched key set",
                index + 1,
                chunks.len()
            )
        })?;

        translated.extend(result);
        pb.inc(1);
    }
    pb.finish_with_message("translated");

    catalogs::write_catalog(&target_path, &translated)?;
    println!("Translated strings saved to {}", target_path.display());

    Ok(CatalogStats {
        messages: translated.len(),
        chunks: chunks.len(),
    })
}

/// Second pass: translate the store description as one blob and write it,
/// trimmed of surrounding whitespace, overwriting any previous output.
pub async fn translate_description(
    config: &AppConfig,
    translator: &dyn Translator,
    lang_code: &str,
    lang_name: &str,
) -> Result<()> {
    let source_path = config.translation.description_path(SOURCE_LANG);
    let target_path = config.translation.description_path(lang_code);

    let description = catalogs::load_description(&source_path)?;

    println!("Translating store description to {lang_code}");
    let translated = translator
        .translate_description(lang_name, &description)
        .await?;

    catalogs::write_description(&target_path, translated.trim())?;
    println!(
        "Translated store description saved to {}",
        target_path.display()
    );

    Ok(())
}
