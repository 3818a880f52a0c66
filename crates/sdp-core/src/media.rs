//! Media Section Types
//!
//! Typed form of the per-`m=` facts the signaling stack needs from an SDP
//! blob: what kind of media a section carries, which `a=mid:` identifier
//! names it, and which direction was negotiated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::MediaDirection;

/// Kind of media stream a section describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Classify a media-section header line.
    ///
    /// A header beginning with `m=audio` is audio; every other `m=` header
    /// is treated as video. Note that this conflates the remaining media
    /// types with video (an `m=application` header classifies as `Video`),
    /// which is adequate for plain audio/video meeting offers but means
    /// `Video` cannot be read as "definitely a video stream" for arbitrary
    /// SDP.
    pub fn from_media_line(line: &str) -> MediaKind {
        if line.starts_with("m=audio") {
            MediaKind::Audio
        } else {
            MediaKind::Video
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// One parsed `m=` section of an SDP blob.
///
/// Constructed only once both the mid and the direction are known for the
/// section's line range; the parser drops incomplete sections instead of
/// emitting partial records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSection {
    /// Kind of media the section carries
    pub kind: MediaKind,
    /// Media identifier (the `a=mid:` attribute value)
    pub mid: String,
    /// Negotiated transmission direction
    pub direction: MediaDirection,
}

impl MediaSection {
    /// Creates a new MediaSection.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rmeet_sdp_core::{MediaDirection, MediaKind, MediaSection};
    /// let section = MediaSection::new(MediaKind::Audio, "0", MediaDirection::SendRecv);
    /// assert_eq!(section.mid, "0");
    /// ```
    pub fn new(kind: MediaKind, mid: impl Into<String>, direction: MediaDirection) -> Self {
        Self {
            kind,
            mid: mid.into(),
            direction,
        }
    }
}
