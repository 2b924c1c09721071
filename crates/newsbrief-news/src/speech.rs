//! Text-to-speech rendering through the translate TTS endpoint.

use std::time::Duration;

use newsbrief_core::AppConfig;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode};

use crate::error::SpeechError;
use crate::sources::DEFAULT_USER_AGENT;

pub const DEFAULT_BASE_URL: &str = "https://translate.google.com";
pub const DEFAULT_LANG: &str = "hi";
/// Longest text the endpoint accepts in one request, in characters.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Renders text to MP3 audio.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    client: Client,
    base_url: String,
    lang: String,
}

impl SpeechClient {
    /// # Errors
    ///
    /// Returns [`SpeechError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64) -> Result<Self, SpeechError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, DEFAULT_USER_AGENT)
    }

    /// # Errors
    ///
    /// Returns [`SpeechError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            lang: DEFAULT_LANG.to_string(),
        })
    }

    /// Client for the configured endpoint and language.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::Http`] if the `reqwest::Client` cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SpeechError> {
        Ok(Self::with_base_url(
            &config.tts_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?
        .with_lang(&config.tts_lang))
    }

    /// Spoken language code, e.g. `"hi"` or `"en"`.
    #[must_use]
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Render `text` and return the concatenated MP3 bytes.
    ///
    /// # Errors
    ///
    /// - [`SpeechError::EmptyInput`] for blank text; nothing is requested.
    /// - [`SpeechError::Status`] if any chunk gets a non-200 reply.
    /// - [`SpeechError::Http`] on transport failure.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyInput);
        }

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let url = self.chunk_url(chunk);
            let response = self.client.get(&url).send().await?;
            let status = response.status();
            if status != StatusCode::OK {
                tracing::warn!(chunk = index, %status, "speech chunk rejected");
                return Err(SpeechError::Status(status));
            }
            audio.extend_from_slice(&response.bytes().await?);
        }

        tracing::debug!(
            chunks = chunks.len(),
            bytes = audio.len(),
            lang = %self.lang,
            "speech rendered"
        );
        Ok(audio)
    }

    fn chunk_url(&self, chunk: &str) -> String {
        let lang = utf8_percent_encode(&self.lang, NON_ALPHANUMERIC);
        let q = utf8_percent_encode(chunk, NON_ALPHANUMERIC);
        format!(
            "{}/translate_tts?ie=UTF-8&client=tw-ob&tl={lang}&q={q}",
            self.base_url
        )
    }
}

/// Split text into chunks of at most `max_chars` characters.
///
/// Breaks fall between words; a single word longer than the limit is cut.
/// Blank text yields no chunks.
#[must_use]
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
