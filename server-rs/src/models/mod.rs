pub mod lesson;
pub mod ranking;

pub use lesson::*;
pub use ranking::*;
