pub mod common;
pub mod mirror;

pub use common::RunOptions;
pub use mirror::Mirror;
