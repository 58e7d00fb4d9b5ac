use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Tick count {0} does not map to a supported calendar date")]
    OutOfRange(u64),
}
