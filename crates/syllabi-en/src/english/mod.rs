// English phonotactics

pub(crate) mod constants;
pub mod onset;

pub use onset::{MAX_ONSET_LEN, is_valid_onset};
