//! File System Helpers

mod copy;

pub use copy::{copy_dir_all, unlink_if_symlink};
