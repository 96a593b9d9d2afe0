pub mod enrollment_progress;
pub mod rankings;
pub mod schedule_window;
