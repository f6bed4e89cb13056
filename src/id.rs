use std::collections::HashMap;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Raw entropy drawn per candidate id. 6 bytes encode to exactly 8 base64
/// characters with no padding.
const ID_BYTES: usize = 6;

/// Length of every issued id.
pub const ID_LEN: usize = 8;

/// How many candidates to try before giving up. With a 48-bit id space a
/// collision streak this long means the store is pathologically full.
const MAX_ATTEMPTS: u32 = 16;

#[derive(Debug, Error)]
pub enum IdError {
    /// The OS random source could not be read.
    #[error("random source unavailable: {0}")]
    Rng(#[from] rand::Error),

    /// Every candidate collided with an id already in the store.
    #[error("no unique id found after {0} attempts")]
    Exhausted(u32),
}

/// Generate an id that is not a key of `taken`.
///
/// The caller must hold the store lock across this call and the insert that
/// follows it, otherwise the uniqueness check races.
pub fn generate_unique(taken: &HashMap<String, String>) -> Result<String, IdError> {
    for _ in 0..MAX_ATTEMPTS {
        let id = candidate()?;
        if !taken.contains_key(&id) {
            return Ok(id);
        }
    }
    Err(IdError::Exhausted(MAX_ATTEMPTS))
}

/// One candidate: 6 random bytes from the OS, encoded and remapped.
fn candidate() -> Result<String, IdError> {
    let mut raw = [0u8; ID_BYTES];
    OsRng.try_fill_bytes(&mut raw)?;
    Ok(encode(&raw))
}

/// Encode raw bytes with the url-safe base64 alphabet, then substitute the
/// three characters that are awkward in a URL path: `=` -> `c`, `_` -> `D`,
/// `-` -> `G`. The substitution table is fixed; changing it invalidates
/// every previously issued link.
fn encode(raw: &[u8]) -> String {
    URL_SAFE
        .encode(raw)
        .chars()
        .map(|ch| match ch {
            '=' => 'c',
            '_' => 'D',
            '-' => 'G',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_bytes_encode_to_eight_chars() {
        assert_eq!(encode(&[0u8; ID_BYTES]), "AAAAAAAA");
        assert_eq!(encode(&[0u8; ID_BYTES]).len(), ID_LEN);
    }

    #[test]
    fn underscore_is_remapped() {
        // every 6-bit group is 63, which the url-safe alphabet renders as '_'
        assert_eq!(encode(&[0xff; ID_BYTES]), "DDDDDDDD");
    }

    #[test]
    fn hyphen_is_remapped() {
        // every 6-bit group is 62 ('-'): bit pattern 111110 repeated
        assert_eq!(encode(&[0xfb, 0xef, 0xbe, 0xfb, 0xef, 0xbe]), "GGGGGGGG");
    }

    #[test]
    fn padding_is_remapped() {
        // 5 bytes leave one '=' of padding
        assert_eq!(encode(&[0u8; 5]), "AAAAAAAc");
    }

    #[test]
    fn candidates_use_only_the_remapped_alphabet() {
        for _ in 0..256 {
            let id = candidate().unwrap();
            assert_eq!(id.len(), ID_LEN);
            assert!(
                id.chars().all(|c| c.is_ascii_alphanumeric()),
                "unexpected character in id {id:?}"
            );
            assert!(!id.contains(['=', '_', '-']));
        }
    }

    #[test]
    fn generate_unique_avoids_taken_ids() {
        let mut taken = HashMap::new();
        taken.insert("AAAAAAAA".to_owned(), "https://example.com".to_owned());

        let id = generate_unique(&taken).unwrap();
        assert!(!taken.contains_key(&id));
        assert_eq!(id.len(), ID_LEN);
    }
}
