pub mod hotness;
pub mod news;
pub mod shared;
pub mod source;
