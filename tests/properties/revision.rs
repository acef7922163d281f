//! Property tests for revision validation.

use proptest::prelude::*;

use octoship::Revision;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Revision parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = Revision::parse(&s);
    }

    /// PROPERTY: An accepted revision is always a single, non-option argv element.
    #[test]
    fn property_accepted_revision_is_one_plain_argument(s in "(?s).{0,64}") {
        if let Ok(rev) = Revision::parse(&s) {
            prop_assert!(!rev.as_str().is_empty());
            prop_assert!(!rev.as_str().starts_with('-'));
            prop_assert!(!rev.as_str().chars().any(char::is_whitespace));
            prop_assert!(!rev.as_str().contains(".."));
            prop_assert_eq!(rev.as_str(), s.as_str());
        }
    }

    /// PROPERTY: Ordinary ref names are accepted and their range has exactly one `..`.
    #[test]
    fn property_ref_names_form_two_dot_ranges(
        older in "[A-Za-z0-9_/~^]{1,32}",
        newer in "[A-Za-z0-9_/~^]{1,32}",
    ) {
        let older = Revision::parse(&older).unwrap();
        let newer = Revision::parse(&newer).unwrap();
        let range = older.range_to(&newer);

        prop_assert_eq!(range.matches("..").count(), 1);
        prop_assert_eq!(range, format!("{}..{}", older, newer));
    }
}
