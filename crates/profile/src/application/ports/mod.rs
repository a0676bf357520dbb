// crates/profile/src/application/ports/mod.rs

mod directory_gateway;
mod directory_gateway_stub;

pub use directory_gateway::{DirectoryGateway, ProfileSnapshot, RelationSnapshot};
pub use directory_gateway_stub::DirectoryGatewayStub;
