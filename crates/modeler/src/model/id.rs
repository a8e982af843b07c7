//! Record identifier generation.

use uuid::Uuid;

/// Key under which every blank record stores its generated identifier.
pub const ID_KEY: &str = "_id";

/// Generates a fresh record identifier.
///
/// Identifiers only need to be collision-improbable within a single process
/// run; they are random v4 UUIDs rendered as non-hyphenated lowercase hex.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_id_unique_within_run() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generate_id()));
        }
    }
}
