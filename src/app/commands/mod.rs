pub mod compose;
pub mod generate;
pub mod presets;
