pub mod answer;
pub mod ask;
pub mod delete;
pub mod dispatch;
pub mod export;
pub mod get;
pub mod list;
pub mod stats;
