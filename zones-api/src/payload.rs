//! Wire payloads as marshaled by the play-zones server
//!
//! Field names follow the server's JSON output exactly: the top-level
//! state document uses Go-style capitalized keys (`Playing`, `Devices`),
//! while device entries use the snake_case names of the upstream Spotify
//! player API. Unknown fields (such as the server's `URLs` list) are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Currently playing track as reported by the server
///
/// All fields are absent until something is playing; `Artists` is an
/// empty list rather than null in that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayingPayload {
    /// Track title
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Album title
    #[serde(rename = "Album", default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Artist names, in the order the server lists them
    #[serde(rename = "Artists", default)]
    pub artists: Vec<String>,
}

/// A playback device entry as reported by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePayload {
    /// Opaque device identifier
    pub id: String,

    /// Friendly device name
    pub name: String,

    /// Device category (e.g. "Speaker", "Computer")
    #[serde(rename = "type")]
    pub kind: String,

    /// Volume as a percentage, 0-100
    pub volume_percent: u8,

    /// Whether playback currently targets this device
    pub is_active: bool,

    /// Whether the device refuses remote control
    #[serde(default)]
    pub is_restricted: bool,
}

/// Full state document returned by `GET devices.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebStatePayload {
    /// Currently playing track
    #[serde(rename = "Playing", default)]
    pub playing: PlayingPayload,

    /// All known playback devices
    #[serde(rename = "Devices", default)]
    pub devices: Vec<DevicePayload>,
}
