//! SDP Media Section Parsing
//!
//! Extracts the per-section facts the signaling stack consumes from a raw
//! SDP blob (RFC 8866): the media kind from each `m=` header, the `a=mid:`
//! identifier, and the negotiated direction attribute.
//!
//! The blob is split on `\r\n`, every line is classified into a typed form,
//! and the line sequence is partitioned into windows running from one `m=`
//! header up to the next. Each window yields at most one [`MediaSection`];
//! windows missing either a non-empty mid or a direction are dropped from
//! the result rather than reported as errors.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    combinator::{map, map_opt, recognize, rest},
    sequence::{pair, preceded},
};
use tracing::{debug, warn};

use crate::direction::MediaDirection;
use crate::media::{MediaKind, MediaSection};

/// Line separator mandated for SDP bodies (RFC 8866 section 5).
const LINE_SEPARATOR: &str = "\r\n";

/// One classified SDP line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SdpLine<'a> {
    /// `m=` media-section header, carrying the kind it opens
    MediaHeader(MediaKind),
    /// `a=mid:` attribute, carrying the raw value after the prefix
    Mid(&'a str),
    /// Whole-line direction attribute
    Direction(MediaDirection),
    /// Anything else, inert for section extraction
    Other,
}

fn media_header(input: &str) -> IResult<&str, SdpLine<'_>> {
    map(recognize(pair(tag("m="), rest)), |line: &str| {
        SdpLine::MediaHeader(MediaKind::from_media_line(line))
    })(input)
}

fn mid_attribute(input: &str) -> IResult<&str, SdpLine<'_>> {
    // The value is everything after the prefix, taken verbatim. It may be
    // empty; extraction decides what an empty mid means.
    map(preceded(tag("a=mid:"), rest), SdpLine::Mid)(input)
}

fn direction_attribute(input: &str) -> IResult<&str, SdpLine<'_>> {
    map_opt(rest, |line: &str| {
        MediaDirection::from_attribute_line(line).map(SdpLine::Direction)
    })(input)
}

fn sdp_line(input: &str) -> IResult<&str, SdpLine<'_>> {
    alt((media_header, mid_attribute, direction_attribute))(input)
}

/// Classify a single line; unrecognized lines are inert.
fn classify_line(line: &str) -> SdpLine<'_> {
    match sdp_line(line) {
        Ok((_, parsed)) => parsed,
        Err(_) => SdpLine::Other,
    }
}

fn is_media_header(line: &SdpLine<'_>) -> bool {
    matches!(line, SdpLine::MediaHeader(_))
}

/// Scan one window of classified lines for a complete media section.
///
/// Mid and direction detection are independent single-assignment scans: the
/// first `a=mid:` line claims the mid slot (even with an empty value) and
/// the first direction attribute claims the direction slot. A section is
/// produced only when the mid is non-empty and a direction was found.
fn extract_section(window: &[SdpLine<'_>]) -> Option<MediaSection> {
    let kind = match window.first() {
        Some(SdpLine::MediaHeader(kind)) => *kind,
        _ => return None,
    };

    let mut mid: Option<&str> = None;
    let mut direction: Option<MediaDirection> = None;

    for line in window.iter().copied() {
        match line {
            SdpLine::Mid(value) => {
                if mid.is_none() {
                    debug!("Found mid: {}", value);
                    mid = Some(value);
                }
            }
            SdpLine::Direction(parsed) => {
                if direction.is_none() {
                    debug!("Found direction: {}", parsed);
                    direction = Some(parsed);
                }
            }
            _ => {}
        }
    }

    let mid = mid.filter(|value| !value.is_empty())?;
    let direction = direction?;

    Some(MediaSection::new(kind, mid, direction))
}

/// Parse an SDP blob into its complete media sections.
///
/// The input uses `\r\n` line separators per SDP convention; lines joined
/// by any other separator are treated as one line. Session-level lines
/// before the first `m=` header are ignored. The returned sections appear
/// in the order their headers appear in the blob, and sections that fail to
/// provide both a non-empty `a=mid:` value and a direction attribute are
/// omitted. Malformed input never produces an error: the result is simply
/// whatever complete sections were found, possibly none.
///
/// # Examples
///
/// ```
/// use rmeet_sdp_core::{parse_sdp, MediaDirection, MediaKind};
///
/// let blob = "v=0\r\nm=audio 9 UDP/TLS/RTP/SAVPF 111\r\na=mid:0\r\na=sendrecv\r\n";
/// let sections = parse_sdp(blob);
///
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].kind, MediaKind::Audio);
/// assert_eq!(sections[0].mid, "0");
/// assert_eq!(sections[0].direction, MediaDirection::SendRecv);
/// ```
pub fn parse_sdp(sdp: &str) -> Vec<MediaSection> {
    let raw_lines: Vec<&str> = sdp.split(LINE_SEPARATOR).collect();
    let lines: Vec<SdpLine<'_>> = raw_lines.iter().map(|line| classify_line(line)).collect();

    let mut sections = Vec::new();

    // Session-level lines before the first media header carry nothing the
    // extraction needs.
    let mut start = match lines.iter().position(is_media_header) {
        Some(index) => index,
        None => return sections,
    };

    while start < lines.len() {
        let end = lines[start + 1..]
            .iter()
            .position(is_media_header)
            .map(|offset| start + 1 + offset)
            .unwrap_or(lines.len());

        match extract_section(&lines[start..end]) {
            Some(section) => sections.push(section),
            None => {
                warn!(
                    "Discarding incomplete media section starting with: {}",
                    raw_lines[start]
                );
            }
        }

        start = end;
    }

    sections
}
