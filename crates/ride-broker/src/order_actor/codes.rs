//! Confirmation code generation.
//!
//! The Order actor receives its [`CodeSource`] as run-time context, so tests can inject a
//! predictable source while production draws codes uniformly from `00000..=99999`.

use crate::model::{ConfirmationCode, CODE_SPACE};
use rand::Rng;

/// Produces confirmation codes for arriving drivers.
pub trait CodeSource: Send + Sync {
    fn next_code(&self) -> ConfirmationCode;
}

/// Uniform codes from the thread-local RNG. Not cryptographically strong, which is fine for
/// a code the passenger reads out loud.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodes;

impl CodeSource for RandomCodes {
    fn next_code(&self) -> ConfirmationCode {
        ConfirmationCode::from_number(rand::thread_rng().gen_range(0..CODE_SPACE))
    }
}
