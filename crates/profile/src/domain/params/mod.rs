// crates/profile/src/domain/params/mod.rs

mod profile_patch;
mod sort_field;

pub use profile_patch::ProfilePatch;
pub use sort_field::SortField;
