use anyhow::{Context, Result};
use tracing::info;

use crate::audio;
use crate::config::Config;
use crate::invocation::Invocation;
use crate::record::CallRecord;
use crate::sinks;
use crate::stt::{SttClient, SttConfig};

/// Run the whole pipeline for one validated invocation
///
/// Linear, single file per run: inspect the WAV, recognize, classify, log,
/// optionally insert a row, delete the source file. Every failure propagates
/// to the caller; nothing is retried.
pub async fn run(invocation: &Invocation, config: &Config) -> Result<()> {
    let (audio_config, duration) =
        audio::inspect(&invocation.filename).context("Failed to inspect audio file")?;
    info!(
        encoding = audio_config.encoding,
        sample_rate_hertz = audio_config.sample_rate_hertz,
        num_channels = audio_config.num_channels,
        duration,
        "Audio parameters read"
    );

    let client = SttClient::new(SttConfig::new(config));
    let transcript = client
        .recognize(&invocation.filename, &audio_config)
        .await
        .context("Recognition failed")?;
    info!(transcript = %transcript, "Transcript received");

    finish(invocation, config, &transcript, duration).await
}

/// Post-recognition half of the pipeline: classify, format, persist, delete
pub async fn finish(
    invocation: &Invocation,
    config: &Config,
    transcript: &str,
    duration: f64,
) -> Result<()> {
    let result = invocation.stage.classify(transcript);
    info!(result = result.as_str(), "Transcript classified");

    let record = CallRecord::assemble(result, &invocation.phone, duration, transcript);
    sinks::append_record(&config.result_log, &record)?;
    info!(path = ?config.result_log, "Result logged");

    if invocation.dbwrite {
        let url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL environment variable not set")?;
        sinks::insert_record(url, &config.db_table, &record).await?;
        info!(table = %config.db_table, "Result row inserted");
    }

    std::fs::remove_file(&invocation.filename)
        .with_context(|| format!("Failed to delete {:?}", invocation.filename))?;
    info!(file = ?invocation.filename, "Source file deleted");

    Ok(())
}
