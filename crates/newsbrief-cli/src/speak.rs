//! `speak` command handler.

use std::path::Path;

use anyhow::Context;
use newsbrief_core::AppConfig;
use newsbrief_news::SpeechClient;

/// Render `text` to speech and write the MP3 to `out`.
///
/// # Errors
///
/// Returns an error if the text is blank, the speech service fails, or the
/// file cannot be written.
pub(crate) async fn run_speak(
    config: &AppConfig,
    text: &str,
    out: &Path,
    lang: Option<&str>,
) -> anyhow::Result<()> {
    let mut client = SpeechClient::from_config(config)?;
    if let Some(lang) = lang {
        client = client.with_lang(lang);
    }

    let audio = client.synthesize(text).await?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, &audio).with_context(|| format!("writing {}", out.display()))?;

    tracing::info!(path = %out.display(), bytes = audio.len(), lang = client.lang(), "speech saved");
    println!("saved {} bytes to {}", audio.len(), out.display());
    Ok(())
}
