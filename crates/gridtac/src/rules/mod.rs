//! Win and draw rules generalized to N-by-N boards.

pub mod draw;
pub mod win;
