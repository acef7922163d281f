//! Test fixtures - stub tools and site content.

/// Stand-in for `bundle exec rake generate`.
///
/// Refuses to run without `.bundle` (like bundler would), records its working
/// directory, then "generates" the site by copying `source/` into `public/`.
pub const STUB_BUILD: &str = r###"#!/bin/sh
[ "$1" = "--version" ] && exit 0
pwd > "$STUB_LOG_DIR/build_cwd"
if [ ! -d .bundle ] || [ ! -d vendor ]; then
  echo "Could not locate .bundle" >&2
  exit 3
fi
if [ -n "$STUB_BUILD_FAIL" ]; then
  echo "rake aborted!" >&2
  exit 1
fi
echo "## Generating Site with Jekyll"
mkdir -p public
cp -R source/. public/
"###;

/// Stand-in for `s3cmd`: records argv (one per line), cwd, and what it was given.
pub const STUB_SYNC: &str = r#"#!/bin/sh
[ "$1" = "--version" ] && exit 0
printf '%s\n' "$@" > "$STUB_LOG_DIR/sync_args"
pwd > "$STUB_LOG_DIR/sync_cwd"
ls -A public > "$STUB_LOG_DIR/sync_public"
exit "${STUB_SYNC_EXIT:-0}"
"#;

pub const INDEX_HTML: &str = "<html><body>Hello</body></html>\n";

pub const ABOUT_HTML: &str = "<html><body>About</body></html>\n";

pub const BUNDLE_CONFIG: &str = "---\nBUNDLE_PATH: \"vendor/bundle\"\n";

/// Flags every upload carries, in order
pub const SYNC_FLAGS: [&str; 3] = ["--acl-public", "--no-delete-removed", "--reduced-redundancy"];
