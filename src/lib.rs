pub mod color;
pub mod config;
pub mod export;
pub mod model;
pub mod palette;
pub mod snippet;
pub mod storage;
pub mod store;
