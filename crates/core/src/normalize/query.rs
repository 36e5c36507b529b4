//! Query canonicalization.

use url::form_urlencoded;

/// Canonical query string, without the leading `?`.
///
/// Pairs are form-decoded, stable-sorted by key bytes, and re-serialized
/// with `application/x-www-form-urlencoded` rules (space as `+`). Pairs that
/// share a key keep their input order. Returns `None` when there are no
/// pairs, so the caller omits the `?` entirely.
pub fn canonical_query(query: Option<&str>) -> Option<String> {
    let mut pairs: Vec<_> = form_urlencoded::parse(query?.as_bytes()).collect();
    if pairs.is_empty() {
        return None;
    }

    pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    Some(form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_by_key() {
        assert_eq!(canonical_query(Some("z=1&a=2&m=3")).as_deref(), Some("a=2&m=3&z=1"));
    }

    #[test]
    fn test_single_pair_unchanged() {
        assert_eq!(canonical_query(Some("key=value")).as_deref(), Some("key=value"));
    }

    #[test]
    fn test_space_renders_as_plus() {
        assert_eq!(canonical_query(Some("q=hello%20world")).as_deref(), Some("q=hello+world"));
        assert_eq!(canonical_query(Some("q=hello+world")).as_deref(), Some("q=hello+world"));
    }

    #[test]
    fn test_missing_or_empty_query_is_omitted() {
        assert_eq!(canonical_query(None), None);
        assert_eq!(canonical_query(Some("")), None);
        assert_eq!(canonical_query(Some("&&")), None);
    }

    #[test]
    fn test_same_key_keeps_input_order() {
        assert_eq!(canonical_query(Some("b=1&a=2&a=1")).as_deref(), Some("a=2&a=1&b=1"));
    }

    #[test]
    fn test_key_without_value() {
        assert_eq!(canonical_query(Some("flag&a=1")).as_deref(), Some("a=1&flag="));
    }

    #[test]
    fn test_byte_wise_key_order() {
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(canonical_query(Some("b=1&B=2&a=3")).as_deref(), Some("B=2&a=3&b=1"));
    }

    #[test]
    fn test_reserved_characters_reencoded() {
        assert_eq!(canonical_query(Some("next=%2Fhome%3Fx%3D1")).as_deref(), Some("next=%2Fhome%3Fx%3D1"));
        assert_eq!(canonical_query(Some("t=a~b")).as_deref(), Some("t=a%7Eb"));
    }

    #[test]
    fn test_invalid_utf8_decodes_lossily() {
        // Both bytes become U+FFFD, so the two queries collapse.
        assert_eq!(canonical_query(Some("k=%FF")).as_deref(), Some("k=%EF%BF%BD"));
        assert_eq!(canonical_query(Some("k=%FF")), canonical_query(Some("k=%FE")));
    }

    #[test]
    fn test_idempotent() {
        let once = canonical_query(Some("z=%C3%A9t%C3%A9&a=1+2&m=%2f")).unwrap();
        assert_eq!(canonical_query(Some(&once)).as_deref(), Some(once.as_str()));
    }
}
