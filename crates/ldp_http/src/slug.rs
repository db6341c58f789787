//! `Slug` typed header, as defined by RFC 5023 §9.7 and reused by LDP for
//! client-suggested URI path segments on POST.

use headers::{Header, HeaderName, HeaderValue};
use once_cell::sync::Lazy;
use percent_encoding::{percent_decode, utf8_percent_encode, AsciiSet, CONTROLS};

static SLUG_ENCODE_SET: AsciiSet = CONTROLS.add(b'%').add(b'/').add(b'?').add(b'#');

static SLUG_HEADER_NAME: Lazy<HeaderName> = Lazy::new(|| HeaderName::from_static("slug"));

/// A client-suggested path segment for a resource created via POST.
///
/// Multiple `Slug` header instances are joined with `,` on decode, mirroring
/// how other free-text headers are combined; LDP servers only ever see one
/// in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(pub String);

impl Slug {
    /// Borrow the decoded slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Header for Slug {
    fn name() -> &'static HeaderName {
        &SLUG_HEADER_NAME
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        Self: Sized,
        I: Iterator<Item = &'i HeaderValue>,
    {
        let mut decoded_parts = Vec::new();
        for value in values {
            let decoded = percent_decode(value.as_bytes())
                .decode_utf8()
                .map_err(|_| headers::Error::invalid())?
                .into_owned();
            decoded_parts.push(decoded);
        }
        if decoded_parts.is_empty() {
            return Err(headers::Error::invalid());
        }
        Ok(Slug(decoded_parts.join(",")))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        let encoded = utf8_percent_encode(&self.0, &SLUG_ENCODE_SET).to_string();
        if let Ok(value) = HeaderValue::from_str(&encoded) {
            values.extend(std::iter::once(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", "a")]
    #[case("a b", "a b")]
    #[case("a%20b", "a b")]
    fn decodes_as_expected(#[case] raw: &str, #[case] expected: &str) {
        let value = HeaderValue::from_str(raw).unwrap();
        let slug = Slug::decode(&mut std::iter::once(&value)).unwrap();
        assert_eq!(slug.as_str(), expected);
    }
}
