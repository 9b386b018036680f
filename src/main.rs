use anyhow::{Context, Result};
use async_openai::{Client, config::OpenAIConfig};
use clap::Parser;
use locales_llm::{configs::AppConfig, languages, pipeline, translators::LlmTranslator};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(name = "locales-llm")]
#[command(about = "Translate _locales catalogs and store listings using LLM", long_about = None)]
struct Args {
    #[arg(help = "Target locale code (e.g. fr, pt_BR, zh_CN)")]
    lang: String,

    #[arg(
        long,
        default_value = ".",
        help = "Project root containing the _locales and screenshots directories"
    )]
    root: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();

    let lang_name = languages::language_name(&args.lang)
        .with_context(|| format!("Unknown locale code '{}'", args.lang))?;

    println!("🌍 locales-llm");
    println!("🎯 Target language: {} ({})", args.lang, lang_name);

    let config = AppConfig::from_env(args.root)?;

    let client = Client::with_config(OpenAIConfig::new().with_api_key(&config.llm.api_key));
    let translator = LlmTranslator {
        client,
        model: config.llm.model.clone(),
        max_tokens: config.llm.max_tokens,
    };

    let stats = pipeline::translate_catalog(&config, &translator, &args.lang, lang_name).await?;
    pipeline::translate_description(&config, &translator, &args.lang, lang_name).await?;

    let duration = start_time.elapsed();

    println!("📊 Summary");
    println!(
        "📝 Translated: {} messages in {} chunk(s)",
        stats.messages, stats.chunks
    );
    println!("⏱️ Duration: {:.2}s", duration.as_secs_f64());

    Ok(())
}
