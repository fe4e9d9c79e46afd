//! Locally unique keys for document content blocks.

use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const KEY_LEN: usize = 19;

/// Generate a 19-character alphanumeric key for a content block.
///
/// Keys only need to be unique within a single document, so a plain
/// thread-local generator is sufficient; this is not a security token.
pub fn content_key(rng: &mut impl Rng) -> String {
    (0..KEY_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn key_is_nineteen_alphanumeric_chars() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let key = content_key(&mut rng);
            assert_eq!(key.len(), 19);
            assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn keys_vary() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = content_key(&mut rng);
        let b = content_key(&mut rng);
        assert_ne!(a, b);
    }
}
