//! 포화 증기 온도 계산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 함께 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod steam;
pub mod ui_cli;
pub mod units;
