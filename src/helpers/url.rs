//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone in a path segment (RFC 3986 unreserved)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a single URL path segment
pub fn encode_url(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
