use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("command queue is full ({capacity} pending)")]
    QueueFull { capacity: usize },

    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, GameError>;
