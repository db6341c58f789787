//! Weak-ETag computation, per spec.md §6: `W/"<lowercase hex MD5 of the
//! serialized representation>"`.

use headers::ETag;
use md5::{Digest, Md5};

/// Compute the weak ETag for a serialized representation's bytes.
pub fn compute(serialized: &[u8]) -> ETag {
    let mut hasher = Md5::new();
    hasher.update(serialized);
    let digest = hasher.finalize();
    let hex = digest.iter().map(|b| format!("{b:02x}")).collect::<String>();
    format!(r#"W/"{hex}""#)
        .parse()
        .expect("weak etag syntax is always valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_bytes_produce_same_etag() {
        let a = compute(b"hello");
        let b = compute(b"hello");
        assert_eq!(a, b);
    }

    #[test]
    fn different_bytes_produce_different_etag() {
        assert_ne!(compute(b"hello"), compute(b"world"));
    }

    #[test]
    fn etag_is_weak() {
        let tag = compute(b"hello").to_string();
        assert!(tag.starts_with("W/\""));
    }
}
