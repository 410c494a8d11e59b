//! 증기 포화선 계산 모듈 모음.

pub mod if97;
pub mod range_table;
pub mod saturation;

pub use if97::{Region4Curve, SaturationCurve, Seuif97Curve};
pub use range_table::*;
pub use saturation::*;
