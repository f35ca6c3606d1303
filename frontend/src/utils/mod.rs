pub mod files;
pub mod navigation;
pub mod storage;
