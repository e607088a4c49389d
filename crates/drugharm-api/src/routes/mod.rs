pub mod comparison;
pub mod health;
pub mod studies;
