//! Content fingerprinting for snapshot deduplication.

/// Computes the hex BLAKE3 digest of a session payload.
///
/// The digest is used purely as a deduplication key when listing sessions:
/// two snapshots with identical payloads always produce identical digests.
/// It is not an integrity or authenticity primitive.
pub fn fingerprint(data: &str) -> String {
    blake3::hash(data.as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_input_yields_identical_digest() {
        let a = fingerprint(r#"{"model":"logistic","params":[1.0,2.5]}"#);
        let b = fingerprint(r#"{"model":"logistic","params":[1.0,2.5]}"#);
        assert_eq!(a, b);
    }

    #[test]
    fn different_input_yields_different_digest() {
        assert_ne!(fingerprint("snapshot-a"), fingerprint("snapshot-b"));
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let digest = fingerprint("");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
