pub mod changelog;
pub mod manifest_ops;
pub mod release;
