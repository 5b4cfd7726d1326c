// tests/common/mod.rs
//! 共通テストユーティリティ


#[allow(unused_imports)]
pub use temp::TempWorkspace;
