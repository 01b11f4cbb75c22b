//! VOD clip download
//!
//! Assembles a finished clip into a single MP4 on disk: fetch the clip's MPD
//! document, then append the initialization segment and each numbered media
//! segment in order. Every media request carries the federated session token;
//! a failed segment fetch aborts the download.

use crate::{
    Error, Result,
    api::RhombusClient,
    config::DownloadSettings,
    vod::mpd::{self, MpdInfo},
};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// A clip written to disk
#[derive(Debug, Clone)]
pub struct DownloadedClip {
    /// Path of the assembled `clip.mp4`
    pub path: PathBuf,
    /// Directory the clip was written under
    pub dir: PathBuf,
    /// Start of the clip, for downloads addressed by time window
    pub start_time: Option<DateTime<Utc>>,
}

/// Download the most recent `duration_sec` seconds of VOD from a URI
/// template.
///
/// Expands the template's `{START_TIME}` (now minus the duration, seconds
/// since epoch) and `{DURATION}` placeholders, then assembles the clip under
/// `<output_dir>/<start_time>/clip.mp4`.
pub async fn download_vod(
    client: &RhombusClient,
    settings: &DownloadSettings,
    uri_template: &str,
    federated_token: &str,
    duration_sec: u64,
) -> Result<DownloadedClip> {
    let start = Utc::now() - chrono::Duration::seconds(duration_sec as i64);
    let uri = expand_uri_template(uri_template, start.timestamp(), duration_sec);

    let dir = settings.output_dir.join(start.timestamp().to_string());
    let path = write_clip(client, settings, &uri, federated_token, duration_sec, &dir).await?;

    Ok(DownloadedClip {
        path,
        dir,
        start_time: Some(start),
    })
}

/// Download the VOD clip referenced by a webhook alert.
///
/// Alert URIs address a fixed window and carry no placeholders; the clip is
/// assembled under `<output_dir>/<alert_uuid>/clip.mp4`.
pub async fn download_alert_vod(
    client: &RhombusClient,
    settings: &DownloadSettings,
    uri: &str,
    federated_token: &str,
    duration_sec: u64,
    alert_uuid: &str,
) -> Result<DownloadedClip> {
    let dir = settings.output_dir.join(alert_uuid);
    let path = write_clip(client, settings, uri, federated_token, duration_sec, &dir).await?;

    Ok(DownloadedClip {
        path,
        dir,
        start_time: None,
    })
}

/// Substitute the `{START_TIME}` and `{DURATION}` placeholders of a VOD URI
/// template
fn expand_uri_template(template: &str, start_time: i64, duration_sec: u64) -> String {
    template
        .replace("{START_TIME}", &start_time.to_string())
        .replace("{DURATION}", &duration_sec.to_string())
}

/// Fetch the MPD at `uri` and concatenate its segments into `<dir>/clip.mp4`
async fn write_clip(
    client: &RhombusClient,
    settings: &DownloadSettings,
    uri: &str,
    federated_token: &str,
    duration_sec: u64,
    dir: &Path,
) -> Result<PathBuf> {
    let mpd_doc = client.media_get(uri, federated_token).await?.text().await?;
    let info = MpdInfo::parse(&mpd_doc)?;

    fs::create_dir_all(dir).await?;
    let path = dir.join("clip.mp4");
    let mut file = fs::File::create(&path).await?;

    let init_uri = mpd::segment_uri(uri, &info.init_string)
        .ok_or_else(|| Error::mpd(format!("unrecognized MPD URI ending: {uri}")))?;
    save_segment(client, &mut file, &init_uri, federated_token).await?;

    // Segments are fixed-length, so the clip spans duration / segment_seconds
    // of them
    let segment_count = (duration_sec / settings.segment_seconds) as u32;
    for index in 0..segment_count {
        let segment_uri = mpd::segment_uri_at(&info, uri, index)
            .ok_or_else(|| Error::mpd(format!("unrecognized MPD URI ending: {uri}")))?;
        save_segment(client, &mut file, &segment_uri, federated_token).await?;
    }

    file.flush().await?;
    info!("Saved {} segments to {:?}", segment_count + 1, path);

    Ok(path)
}

/// Append one media segment to the output file
async fn save_segment(
    client: &RhombusClient,
    file: &mut fs::File,
    uri: &str,
    federated_token: &str,
) -> Result<()> {
    debug!("Saving segment {}", uri);
    let bytes = client.media_get(uri, federated_token).await?.bytes().await?;
    file.write_all(&bytes).await?;
    Ok(())
}
