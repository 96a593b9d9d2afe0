pub mod enrollment;
pub mod health;
pub mod lessons;
pub mod rankings;
