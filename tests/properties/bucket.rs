//! Property tests for bucket name validation.

use proptest::prelude::*;

use octoship::BucketName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Bucket parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,96}") {
        let _ = BucketName::parse(&s);
    }

    /// PROPERTY: Accepted names obey the length and character rules.
    #[test]
    fn property_accepted_names_are_dns_safe(s in "[a-zA-Z0-9._-]{0,80}") {
        if let Ok(bucket) = BucketName::parse(&s) {
            let name = bucket.as_str();
            prop_assert!((BucketName::MIN_LEN..=BucketName::MAX_LEN).contains(&name.len()));
            prop_assert!(name.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'-'));
            prop_assert!(!name.starts_with(['.', '-']));
            prop_assert!(!name.ends_with(['.', '-']));
        }
    }

    /// PROPERTY: The sync destination is always `s3://<name>/`.
    #[test]
    fn property_url_wraps_the_name(s in "[a-z0-9][a-z0-9-]{1,40}[a-z0-9]") {
        let bucket = BucketName::parse(&s).unwrap();
        prop_assert_eq!(bucket.url(), format!("s3://{}/", s));
    }
}
