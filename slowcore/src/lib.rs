//! slowcore — shared library for slow computer applications

pub mod logging;
pub mod storage;
pub mod theme;

pub use theme::SlowTheme;
