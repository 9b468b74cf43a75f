pub mod file_source;
pub mod memory_source;

pub use file_source::FileSource;
pub use memory_source::MemorySource;

/// Length of backend object identifiers
pub const UID_LENGTH: usize = 11;

/// Generate an identifier shaped like the backend's: a letter followed by
/// ten alphanumerics
pub fn generate_uid() -> String {
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("v{}", &random[..UID_LENGTH - 1])
}

/// Whether `id` is safe to use as a storage key
pub fn is_valid_uid(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_uids() {
        let a = generate_uid();
        let b = generate_uid();
        assert_eq!(a.len(), UID_LENGTH);
        assert!(is_valid_uid(&a));
        assert_ne!(a, b);
        assert!(!is_valid_uid("../etc"));
    }
}
