pub mod duration;
pub mod embed;
pub mod generator;
pub mod transcript;
