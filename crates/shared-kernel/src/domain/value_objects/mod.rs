// crates/shared-kernel/src/domain/value_objects/mod.rs

mod login;
mod value_object;

pub use login::Login;
pub use value_object::ValueObject;
