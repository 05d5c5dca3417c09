//! Track information type

use serde::{Deserialize, Serialize};
use zones_api::PlayingPayload;

/// Information about the currently playing track
///
/// Before the first successful sync, all fields are absent: `name` and
/// `album` are `None` and `artists` is empty. Consumers must tolerate
/// this initial value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub name: Option<String>,
    /// Album title
    pub album: Option<String>,
    /// Artist names, in server order
    pub artists: Vec<String>,
}

impl Track {
    /// Create a new empty Track
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if track info has any meaningful content
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.album.is_none() && self.artists.is_empty()
    }

    /// Artist names joined for display
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

impl From<PlayingPayload> for Track {
    fn from(payload: PlayingPayload) -> Self {
        Self {
            name: payload.name,
            album: payload.album,
            artists: payload.artists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let track = Track::new();
        assert!(track.name.is_none());
        assert!(track.artists.is_empty());
        assert!(track.is_empty());
    }

    #[test]
    fn test_from_payload() {
        let payload = PlayingPayload {
            name: Some("A".to_string()),
            album: Some("B".to_string()),
            artists: vec!["C".to_string(), "D".to_string()],
        };

        let track = Track::from(payload);
        assert_eq!(track.name.as_deref(), Some("A"));
        assert_eq!(track.album.as_deref(), Some("B"));
        assert_eq!(track.artist_line(), "C, D");
        assert!(!track.is_empty());
    }
}
