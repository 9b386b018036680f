use anyhow::Result;
use async_openai::{
    Client,
    config::Config,
    types::chat::{
        ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContentPart, CreateChatCompletionRequestArgs,
        ImageUrlArgs, ResponseFormat,
    },
};
use async_trait::async_trait;

use crate::{catalogs::Catalog, screenshots::Screenshot};

const CHUNK_PROMPT: &str = "Assume a role of a professional app localizer. \
     Translate the attached strings from English to {language}. Make it sound \
     natural in the target language, however try to preserve the initial tone \
     of voice. Only reply with the translated strings in JSON format.";

const DESCRIPTION_PROMPT: &str = "Assume the role of a professional app localizer. \
     Translate the following store description from English to {language}. Make \
     it sound natural in the target language, but preserve the initial tone and \
     marketing style. Only reply with the translated text.";

#[async_trait]
pub trait Translator {
    /// Translate one catalog chunk, returning the translated mapping.
    async fn translate_chunk(
        &self,
        language: &str,
        chunk: &Catalog,
        screenshots: &[Screenshot],
    ) -> Result<Catalog>;

    /// Translate the store description as a single unit of free-form text.
    async fn translate_description(&self, language: &str, description: &str) -> Result<String>;
}

/// Returns its input untranslated. Stands in for the real client wherever the
/// pipeline has to run without network access.
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate_chunk(
        &self,
        _language: &str,
        chunk: &Catalog,
        _screenshots: &[Screenshot],
    ) -> Result<Catalog> {
        Ok(chunk.clone())
    }

    async fn translate_description(&self, _language: &str, description: &str) -> Result<String> {
        Ok(description.to_string())
    }
}

pub struct LlmTranslator<C: Config> {
    pub client: Client<C>,
    pub model: String,
    pub max_tokens: u32,
}

#[async_trait]
impl<M> Translator for LlmTranslator<M>
where
    M: Config,
{
    async fn translate_chunk(
        &self,
        language: &str,
        chunk: &Catalog,
        screenshots: &[Screenshot],
    ) -> Result<Catalog> {
        let system_content = CHUNK_PROMPT.replace("{language}", language);
        let payload = serde_json::to_string_pretty(chunk)?;

        let mut parts: Vec<ChatCompletionRequestUserMessageContentPart> = vec![
            ChatCompletionRequestMessageContentPartTextArgs::default()
                .text(payload)
                .build()
                .map_err(|e| anyhow::anyhow!("Failed to build API request: {}", e))?
                .into(),
        ];
        for screenshot in screenshots {
            parts.push(
                ChatCompletionRequestMessageContentPartImageArgs::default()
                    .image_url(
                        ImageUrlArgs::default()
                            .url(screenshot.data_url())
                            .build()
                            .map_err(|e| anyhow::anyhow!("Failed to build API request: {}", e))?,
                    )
                    .build()
                    .map_err(|e| anyhow::anyhow!("Failed to build API request: {}", e))?
                    .into(),
            );
        }

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessage::from(system_content).into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(parts)
                    .build()
                    .map_err(|e| anyhow::anyhow!("Failed to build API request: {}", e))?
                    .into(),
            ])
            .max_completion_tokens(self.max_tokens)
            .response_format(ResponseFormat::JsonObject)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build API request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            anyhow::anyhow!(
                "LLM API call failed for {}: {}. Check your OPENAI_API_KEY and network connectivity.",
                language,
                e
            )
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "LLM returned an empty response for {}. The model may not support JSON output.",
                    language
                )
            })?;

        serde_json::from_str(content).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse LLM JSON response for {}:\n  Parse error: {}\n  Response preview: {}",
                language,
                e,
                content.chars().take(500).collect::<String>()
            )
        })
    }

    async fn translate_description(&self, language: &str, description: &str) -> Result<String> {
        let system_content = DESCRIPTION_PROMPT.replace("{language}", language);

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessage::from(system_content).into(),
                ChatCompletionRequestUserMessage::from(description).into(),
            ])
            .max_completion_tokens(self.max_tokens)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build API request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            anyhow::anyhow!(
                "LLM API call failed for {}: {}. Check your OPENAI_API_KEY and network connectivity.",
                language,
                e
            )
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .ok_or_else(|| anyhow::anyhow!("LLM returned an empty response for {}.", language))?;

        Ok(content.clone())
    }
}
