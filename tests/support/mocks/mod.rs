// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod notification;
pub mod store;
pub mod time;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// インメモリストア（記事・カテゴリ・コメント）
pub use store::InMemoryStore;

// 問い合わせ通知
pub use notification::{CapturingNotifier, FailingNotifier};
