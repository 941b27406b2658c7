use thiserror::Error;

pub type Result<T> = std::result::Result<T, WheelError>;

#[derive(Error, Debug)]
pub enum WheelError {
    #[error("Wheel has no entries")]
    EmptySegmentSet,

    #[error("Invalid segment count: {0} (must be at least 1)")]
    InvalidSegmentCount(usize),

    #[error("Wheel is full ({0} entries)")]
    TooManyEntries(usize),

    #[error("Target index {index} out of range for {count} segments")]
    TargetOutOfRange { index: usize, count: usize },

    #[error("Invalid full spin range: min {min} > max {max}")]
    InvalidSpinRange { min: u32, max: u32 },

    #[error("Rotation is not a finite number: {0}")]
    NonFiniteRotation(f64),

    #[error("A spin is already in progress")]
    SpinInProgress,

    #[error("No spin in progress")]
    NoSpinInProgress,

    #[error("Entries cannot change while the wheel is spinning")]
    SegmentsLocked,

    #[error("Entry name is blank")]
    BlankEntry,

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
