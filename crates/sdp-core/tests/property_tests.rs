//! Property tests for the section parser.

use proptest::prelude::*;
use rmeet_sdp_core::{parse_sdp, MediaDirection, MediaKind};

const DIRECTIONS: [(&str, MediaDirection); 4] = [
    ("a=sendrecv", MediaDirection::SendRecv),
    ("a=sendonly", MediaDirection::SendOnly),
    ("a=recvonly", MediaDirection::RecvOnly),
    ("a=inactive", MediaDirection::Inactive),
];

proptest! {
    /// Every complete section is emitted, in offer order.
    #[test]
    fn complete_sections_are_emitted_in_order(
        sections in prop::collection::vec(("[a-z0-9]{1,6}", 0usize..4, prop::bool::ANY), 1..8),
    ) {
        let mut blob = String::from("v=0\r\no=- 0 0 IN IP4 127.0.0.1\r\n");
        for (mid, direction, audio) in &sections {
            if *audio {
                blob.push_str("m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n");
            } else {
                blob.push_str("m=video 9 UDP/TLS/RTP/SAVPF 96\r\n");
            }
            blob.push_str("a=mid:");
            blob.push_str(mid);
            blob.push_str("\r\n");
            blob.push_str(DIRECTIONS[*direction].0);
            blob.push_str("\r\n");
        }

        let parsed = parse_sdp(&blob);
        prop_assert_eq!(parsed.len(), sections.len());
        for (section, (mid, direction, audio)) in parsed.iter().zip(&sections) {
            let expected_kind = if *audio { MediaKind::Audio } else { MediaKind::Video };
            prop_assert_eq!(section.kind, expected_kind);
            prop_assert_eq!(section.mid.as_str(), mid.as_str());
            prop_assert_eq!(section.direction, DIRECTIONS[*direction].1);
        }
    }

    /// Sections missing a non-empty mid or a direction never appear; the
    /// complete ones keep their relative order.
    #[test]
    fn incomplete_sections_are_dropped(
        sections in prop::collection::vec(
            (prop::option::of("[a-z0-9]{0,6}"), prop::option::of(0usize..4)),
            0..8,
        ),
    ) {
        let mut blob = String::from("v=0\r\n");
        for (mid, direction) in &sections {
            blob.push_str("m=video 9 UDP/TLS/RTP/SAVPF 96\r\n");
            if let Some(mid) = mid {
                blob.push_str("a=mid:");
                blob.push_str(mid);
                blob.push_str("\r\n");
            }
            if let Some(direction) = direction {
                blob.push_str(DIRECTIONS[*direction].0);
                blob.push_str("\r\n");
            }
        }

        let expected: Vec<(&str, MediaDirection)> = sections
            .iter()
            .filter_map(|(mid, direction)| match (mid, direction) {
                (Some(mid), Some(direction)) if !mid.is_empty() => {
                    Some((mid.as_str(), DIRECTIONS[*direction].1))
                }
                _ => None,
            })
            .collect();

        let parsed = parse_sdp(&blob);
        prop_assert_eq!(parsed.len(), expected.len());
        for (section, (mid, direction)) in parsed.iter().zip(&expected) {
            prop_assert_eq!(section.mid.as_str(), *mid);
            prop_assert_eq!(section.direction, *direction);
        }
    }

    /// Lines after the first mid and first direction cannot change the
    /// emitted section.
    #[test]
    fn first_matches_lock_the_section(
        mid in "[a-z0-9]{1,4}",
        extra_mids in prop::collection::vec("[a-z0-9]{1,4}", 0..4),
        first_direction in 0usize..4,
        second_direction in 0usize..4,
    ) {
        let mut blob = String::from("m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n");
        blob.push_str("a=mid:");
        blob.push_str(&mid);
        blob.push_str("\r\n");
        blob.push_str(DIRECTIONS[first_direction].0);
        blob.push_str("\r\n");
        for extra in &extra_mids {
            blob.push_str("a=mid:");
            blob.push_str(extra);
            blob.push_str("\r\n");
        }
        blob.push_str(DIRECTIONS[second_direction].0);
        blob.push_str("\r\n");

        let parsed = parse_sdp(&blob);
        prop_assert_eq!(parsed.len(), 1);
        prop_assert_eq!(parsed[0].mid.as_str(), mid.as_str());
        prop_assert_eq!(parsed[0].direction, DIRECTIONS[first_direction].1);
    }

    /// Unrecognized lines anywhere in a window are inert.
    #[test]
    fn unrelated_lines_do_not_affect_extraction(
        noise in prop::collection::vec(
            prop::sample::select(vec![
                "c=IN IP4 0.0.0.0",
                "a=rtcp-mux",
                "a=rtpmap:111 opus/48000/2",
                "a=setup:actpass",
                "b=AS:256",
            ]),
            0..6,
        ),
        direction in 0usize..4,
    ) {
        let mut blob = String::from("m=video 9 UDP/TLS/RTP/SAVPF 96\r\n");
        for line in &noise {
            blob.push_str(line);
            blob.push_str("\r\n");
        }
        blob.push_str("a=mid:1\r\n");
        for line in &noise {
            blob.push_str(line);
            blob.push_str("\r\n");
        }
        blob.push_str(DIRECTIONS[direction].0);
        blob.push_str("\r\n");

        let parsed = parse_sdp(&blob);
        prop_assert_eq!(parsed.len(), 1);
        prop_assert_eq!(parsed[0].mid.as_str(), "1");
        prop_assert_eq!(parsed[0].direction, DIRECTIONS[direction].1);
    }
}

#[test]
fn test_bulk_sections_preserve_order() {
    let mut blob = String::new();
    for index in 0..200 {
        blob.push_str("m=video 9 UDP/TLS/RTP/SAVPF 96\r\na=mid:");
        blob.push_str(&index.to_string());
        blob.push_str("\r\na=recvonly\r\n");
    }

    let parsed = parse_sdp(&blob);
    assert_eq!(parsed.len(), 200);
    for (index, section) in parsed.iter().enumerate() {
        assert_eq!(section.mid, index.to_string());
    }
}
