pub mod config;
pub mod effects;
pub mod moods;
pub mod play;
pub mod quote;
pub mod tree;
