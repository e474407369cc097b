pub mod app;
pub mod board;
pub mod board_region;
pub mod score_label;
