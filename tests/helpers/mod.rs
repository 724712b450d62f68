#![allow(unused_imports)]
pub mod api_mocks;
pub mod fixtures;

pub use api_mocks::*;
pub use fixtures::*;
