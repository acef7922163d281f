pub mod deploy;
pub mod version;
