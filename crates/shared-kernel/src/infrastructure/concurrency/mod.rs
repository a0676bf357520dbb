// crates/shared-kernel/src/infrastructure/concurrency/mod.rs

mod keyed_lock;

pub use keyed_lock::KeyedLock;
