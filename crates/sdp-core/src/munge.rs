//! SDP Blob Rewriting
//!
//! Clients routinely edit an SDP blob between generating it and handing it
//! to the peer ("munging"), for example to delete an attribute the remote
//! side mishandles or to cut an offer off at a marker. These helpers perform
//! the two edits the signaling stack needs, working on the raw text so the
//! rest of the blob passes through byte for byte.

/// Remove the first occurrence of `needle` from `sdp`.
///
/// Returns the blob unchanged when `needle` does not occur. Later
/// occurrences are left in place.
pub fn remove_first_occurrence(sdp: &str, needle: &str) -> String {
    sdp.replacen(needle, "", 1)
}

/// Cut `sdp` at the first occurrence of `needle`.
///
/// The needle and everything after it are removed. Returns the blob
/// unchanged when `needle` does not occur.
pub fn truncate_at_first_occurrence(sdp: &str, needle: &str) -> String {
    match sdp.find(needle) {
        Some(position) => sdp[..position].to_string(),
        None => sdp.to_string(),
    }
}
