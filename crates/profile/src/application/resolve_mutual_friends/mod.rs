// crates/profile/src/application/resolve_mutual_friends/mod.rs

mod resolve_mutual_friends_command;
mod resolve_mutual_friends_use_case;
mod resolve_mutual_friends_use_case_test;

pub use resolve_mutual_friends_command::ResolveMutualFriendsCommand;
pub use resolve_mutual_friends_use_case::ResolveMutualFriendsUseCase;
