use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("seed list must contain at least one number")]
    EmptySeedList,
    #[error("seed number at position {0} is blank")]
    BlankSeedNumber(usize),
    #[error("seed number at position {0} repeats an earlier value")]
    DuplicateSeedNumber(usize),
}
