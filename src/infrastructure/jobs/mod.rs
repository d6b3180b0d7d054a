pub mod hotness_refresh;

pub use hotness_refresh::HotnessRefreshJob;
