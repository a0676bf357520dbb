// crates/profile/src/infrastructure/github/mod.rs

mod github_directory_gateway;
mod github_dtos;

pub use github_directory_gateway::GithubDirectoryGateway;
