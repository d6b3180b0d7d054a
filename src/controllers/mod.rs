pub mod analysis;
pub mod health;
pub mod news;
pub mod source;
