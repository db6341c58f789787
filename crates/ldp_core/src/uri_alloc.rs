//! URI allocation for `POST` (spec.md §4.5): `Slug` sanitization, a
//! current-millis fallback, and the reserve/release two-phase protocol
//! against a [`Backend`].

use std::time::{SystemTime, UNIX_EPOCH};

use percent_encoding::{AsciiSet, CONTROLS};

use crate::backend::{Backend, ReserveOutcome};
use crate::error::LdpError;

/// Characters the sanitizer keeps from a client-supplied `Slug`: word
/// characters, whitespace, hyphen, underscore (spec.md §4.5).
fn is_slug_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '_'
}

const SLUG_PATH_ENCODE_SET: &AsciiSet = &CONTROLS.add(b'%').add(b'/').add(b'?').add(b'#');

/// How many times to retry the `res<millis>` fallback before giving up
/// (spec.md §4.5: "bounded ... ≥ 3").
const FALLBACK_RETRY_CAP: usize = 5;

/// Reserve a new member URI under container `container_uri`, honoring an
/// optional client `Slug`. On success, the URI is already reserved in the
/// backend; the caller is responsible for releasing it on any subsequent
/// failure.
#[tracing::instrument(skip(backend))]
pub async fn allocate(
    backend: &dyn Backend,
    container_uri: &str,
    slug: Option<&str>,
) -> Result<String, LdpError> {
    let base = ensure_trailing_slash(strip_hash_and_query(container_uri));

    if let Some(slug) = slug {
        let sanitized: String = slug.chars().filter(|c| is_slug_char(*c)).collect();
        if !sanitized.trim().is_empty() {
            let encoded = percent_encoding::utf8_percent_encode(&sanitized, SLUG_PATH_ENCODE_SET)
                .to_string();
            let candidate = format!("{base}{encoded}");
            match backend
                .reserve_uri(&candidate)
                .await
                .map_err(LdpError::BackendFailure)?
            {
                ReserveOutcome::Reserved => return Ok(candidate),
                ReserveOutcome::Occupied => {
                    tracing::debug!(slug, "slug collision, falling back to generated name");
                }
            }
        }
    }

    for attempt in 0..FALLBACK_RETRY_CAP {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let candidate = format!("{base}res{millis}{}", fallback_suffix(attempt));
        match backend
            .reserve_uri(&candidate)
            .await
            .map_err(LdpError::BackendFailure)?
        {
            ReserveOutcome::Reserved => return Ok(candidate),
            ReserveOutcome::Occupied => continue,
        }
    }

    tracing::debug!(base, "exhausted URI allocation retries, every candidate was taken");
    Err(LdpError::ConflictUriTaken)
}

/// A zero-width suffix on the first attempt, otherwise `-<n>`, so repeated
/// collisions within the same millisecond still diverge.
fn fallback_suffix(attempt: usize) -> String {
    if attempt == 0 {
        String::new()
    } else {
        format!("-{attempt}")
    }
}

fn strip_hash_and_query(uri: &str) -> &str {
    let uri = uri.split('#').next().unwrap_or(uri);
    uri.split('?').next().unwrap_or(uri)
}

fn ensure_trailing_slash(uri: &str) -> String {
    if uri.ends_with('/') {
        uri.to_string()
    } else {
        format!("{uri}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::backend::{BackendError, RemoveOutcome};
    use crate::model::{Resource, ResourceWrite};

    struct FakeBackend {
        occupied: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Backend for FakeBackend {
        async fn init(&self) -> Result<(), BackendError> {
            Ok(())
        }

        async fn reserve_uri(&self, uri: &str) -> Result<ReserveOutcome, BackendError> {
            let mut occupied = self.occupied.lock().unwrap();
            if occupied.iter().any(|o| o == uri) {
                Ok(ReserveOutcome::Occupied)
            } else {
                occupied.push(uri.to_string());
                Ok(ReserveOutcome::Reserved)
            }
        }

        async fn release_uri(&self, uri: &str) {
            self.occupied.lock().unwrap().retain(|o| o != uri);
        }

        async fn read(&self, _uri: &str) -> Result<Option<Resource>, BackendError> {
            Ok(None)
        }

        async fn update(&self, _write: ResourceWrite) -> Result<(), BackendError> {
            Ok(())
        }

        async fn insert_data(
            &self,
            _triples: &[crate::model::InsertTriple],
            _target_uri: &str,
        ) -> Result<(), BackendError> {
            Ok(())
        }

        async fn remove(&self, _uri: &str) -> Result<RemoveOutcome, BackendError> {
            Ok(RemoveOutcome::NotFound)
        }

        async fn get_membership_triples(&self, _container: &str) -> Result<Vec<String>, BackendError> {
            Ok(Vec::new())
        }

        async fn find_container(&self, _uri: &str) -> Result<Option<String>, BackendError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn slug_is_sanitized_and_appended() {
        let backend = FakeBackend {
            occupied: Mutex::new(Vec::new()),
        };
        let uri = allocate(&backend, "http://h/r/c1", Some("a b!@#"))
            .await
            .unwrap();
        assert_eq!(uri, "http://h/r/c1/a%20b");
    }

    #[tokio::test]
    async fn collision_falls_back_to_generated_name() {
        let backend = FakeBackend {
            occupied: Mutex::new(vec!["http://h/r/c1/a".to_string()]),
        };
        let uri = allocate(&backend, "http://h/r/c1", Some("a"))
            .await
            .unwrap();
        assert!(uri.starts_with("http://h/r/c1/res"));
    }

    #[tokio::test]
    async fn empty_slug_falls_back() {
        let backend = FakeBackend {
            occupied: Mutex::new(Vec::new()),
        };
        let uri = allocate(&backend, "http://h/r/c1", Some("!!!"))
            .await
            .unwrap();
        assert!(uri.starts_with("http://h/r/c1/res"));
    }

    #[tokio::test]
    async fn no_slug_falls_back_directly() {
        let backend = FakeBackend {
            occupied: Mutex::new(Vec::new()),
        };
        let uri = allocate(&backend, "http://h/r/c1", None).await.unwrap();
        assert!(uri.starts_with("http://h/r/c1/res"));
    }
}
