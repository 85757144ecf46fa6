pub mod errors;
pub mod recovery;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use recovery::{hash_personal_message, recover_personal_sign_address, verify_signature};
