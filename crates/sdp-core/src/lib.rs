//! SDP media section parsing for the rmeet signaling stack
//!
//! During WebRTC-style negotiation the signaling channel delivers a raw SDP
//! blob describing the media the peer wants to exchange. The stack needs
//! three facts per `m=` section to wire up its transceivers: the kind of
//! media, the `a=mid:` identifier naming the section, and the negotiated
//! direction. [`parse_sdp`] extracts exactly that, dropping sections that
//! fail to provide the full triple.
//!
//! ```
//! use rmeet_sdp_core::{parse_sdp, MediaDirection, MediaKind};
//!
//! let blob = "v=0\r\n\
//!             m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
//!             a=mid:0\r\n\
//!             a=sendrecv\r\n";
//! let sections = parse_sdp(blob);
//!
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].kind, MediaKind::Audio);
//! assert_eq!(sections[0].mid, "0");
//! assert_eq!(sections[0].direction, MediaDirection::SendRecv);
//! ```
//!
//! Full SDP grammar coverage, offer/answer validation, description
//! generation and transport are out of scope; the [`munge`] helpers cover
//! the blob edits the stack performs without reparsing.

// Declare modules
pub mod direction;
pub mod error;
pub mod media;
pub mod munge;
pub mod parser;

// Re-export key public items
pub use direction::{parse_direction, MediaDirection};
pub use error::{Error, Result};
pub use media::{MediaKind, MediaSection};
pub use parser::parse_sdp;
