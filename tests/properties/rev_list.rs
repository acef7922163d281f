//! Property tests for counting `git rev-list` output.

use proptest::prelude::*;

use octoship::application::count_revisions;

fn commit_id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{40}").unwrap()
}

proptest! {
    /// PROPERTY: N commit ids, one per line, count as N whatever the line endings.
    #[test]
    fn property_count_matches_commit_lines(
        ids in proptest::collection::vec(commit_id(), 0..64),
        crlf in any::<bool>(),
        trailing in any::<bool>(),
    ) {
        let sep = if crlf { "\r\n" } else { "\n" };
        let mut output = ids.join(sep);
        if trailing && !ids.is_empty() {
            output.push_str(sep);
        }

        prop_assert_eq!(count_revisions(&output), ids.len());
    }

    /// PROPERTY: Blank lines never count as commits.
    #[test]
    fn property_blank_lines_are_ignored(blank in "[ \t\n]{0,32}") {
        prop_assert_eq!(count_revisions(&blank), 0);
    }
}
