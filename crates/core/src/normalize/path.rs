//! Path canonicalization: dot segments, percent-encoding, and the root slash.

/// Canonical form of an absolute URL path.
///
/// An empty path becomes `/`. A trailing slash is kept when present and never
/// added otherwise. Letter case is preserved. Percent-decoding runs before
/// dot-segment removal so `%2E` segments resolve like `.`.
pub fn canonical_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_owned();
    }
    remove_dot_segments(&canonicalize_percent_encoding(path))
}

/// Resolve `.` and `..` segments left to right (RFC 3986 §5.2.4).
///
/// A path ending in a dot segment resolves to a directory, so `/a/b/..`
/// becomes `/a/`. `..` above the root is dropped.
pub fn remove_dot_segments(path: &str) -> String {
    let Some(rest) = path.strip_prefix('/') else {
        return path.to_owned();
    };

    let segments: Vec<&str> = rest.split('/').collect();
    let last = segments.len() - 1;
    let mut output: Vec<&str> = Vec::with_capacity(segments.len());

    for (i, segment) in segments.into_iter().enumerate() {
        match segment {
            "." => {
                if i == last {
                    output.push("");
                }
            }
            ".." => {
                output.pop();
                if i == last {
                    output.push("");
                }
            }
            other => output.push(other),
        }
    }

    format!("/{}", output.join("/"))
}

/// Canonicalize percent-encoded triplets.
///
/// Triplets for unreserved characters (`A-Z a-z 0-9 - . _ ~`) are decoded.
/// Every other triplet is kept with uppercase hex digits, so `%2f` becomes
/// `%2F` and never `/`. A `%` that does not start a valid triplet is itself
/// encoded as `%25`, which keeps the transform idempotent.
pub fn canonicalize_percent_encoding(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        out.push_str(&input[copied..i]);
        match decode_triplet(&bytes[i..]) {
            Some(byte) if is_unreserved(byte) => {
                out.push(char::from(byte));
                i += 3;
            }
            Some(byte) => {
                out.push_str(&format!("%{byte:02X}"));
                i += 3;
            }
            None => {
                out.push_str("%25");
                i += 1;
            }
        }
        copied = i;
    }

    out.push_str(&input[copied..]);
    out
}

/// RFC 3986 unreserved set.
pub fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn decode_triplet(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [b'%', hi, lo, ..] => Some((hex_value(*hi)? << 4) | hex_value(*lo)?),
        _ => None,
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).and_then(|d| u8::try_from(d).ok())
}
