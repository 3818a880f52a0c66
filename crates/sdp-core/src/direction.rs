//! Media Direction Attributes
//!
//! SDP declares the allowed flow of media for a section with one of four
//! flag attributes (RFC 8866 section 6.7): `a=sendrecv`, `a=sendonly`,
//! `a=recvonly` and `a=inactive`. This module provides the direction enum,
//! the fixed attribute-line lookup used by the parser, and token-level
//! parsing for callers that handle the bare value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Transmission direction negotiated for a media section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaDirection {
    SendRecv,
    SendOnly,
    RecvOnly,
    Inactive,
}

/// Recognized direction attribute lines, matched against whole lines.
const DIRECTION_ATTRIBUTES: [(&str, MediaDirection); 4] = [
    ("a=sendrecv", MediaDirection::SendRecv),
    ("a=sendonly", MediaDirection::SendOnly),
    ("a=recvonly", MediaDirection::RecvOnly),
    ("a=inactive", MediaDirection::Inactive),
];

impl MediaDirection {
    /// Match a full SDP line against the recognized direction attributes.
    ///
    /// The comparison is exact equality: leading or trailing whitespace, or
    /// any extra payload on the line, makes it a non-match.
    pub fn from_attribute_line(line: &str) -> Option<MediaDirection> {
        DIRECTION_ATTRIBUTES
            .iter()
            .find(|(attribute, _)| *attribute == line)
            .map(|(_, direction)| *direction)
    }
}

impl fmt::Display for MediaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaDirection::SendRecv => write!(f, "sendrecv"),
            MediaDirection::SendOnly => write!(f, "sendonly"),
            MediaDirection::RecvOnly => write!(f, "recvonly"),
            MediaDirection::Inactive => write!(f, "inactive"),
        }
    }
}

/// Parse a bare direction token (`"sendrecv"`, `"sendonly"`, ...).
///
/// Tokens are case-sensitive, matching how they appear on the wire.
pub fn parse_direction(value: &str) -> Result<MediaDirection> {
    match value {
        "sendrecv" => Ok(MediaDirection::SendRecv),
        "sendonly" => Ok(MediaDirection::SendOnly),
        "recvonly" => Ok(MediaDirection::RecvOnly),
        "inactive" => Ok(MediaDirection::Inactive),
        _ => Err(Error::InvalidDirection(value.to_string())),
    }
}

impl FromStr for MediaDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_direction(s)
    }
}
