#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(rev) = octoship::Revision::parse(input) {
            assert!(!rev.as_str().starts_with('-'));
            let _ = rev.range_to(&rev);
        }
        if let Ok(bucket) = octoship::BucketName::parse(input) {
            assert!(bucket.url().starts_with("s3://"));
        }
    }
});
