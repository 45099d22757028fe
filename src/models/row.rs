use serde::{Deserialize, Serialize};

/// One raw row of the viewing-activity export, as handed over by the
/// ingestion side: profile, title, start timestamp string, and duration in
/// seconds (possibly absent for interrupted playback records).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRow {
    pub profile_name: String,
    pub title: String,
    pub start_time: String,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub supplemental_video_type: Option<String>,
}

impl RawRow {
    /// Trailers, hooks and other supplemental content carry a non-empty
    /// `supplemental_video_type` and never reach the analyses.
    pub fn is_supplemental(&self) -> bool {
        self.supplemental_video_type
            .as_deref()
            .map_or(false, |kind| !kind.is_empty())
    }
}
