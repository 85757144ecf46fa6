/// Literal prefix of the message a registrant signs.
pub const REGISTRATION_MESSAGE_PREFIX: &str = "Register Validator: ";

/// Build the exact message string that must be signed for `validator_key`.
///
/// The key is used verbatim; signature verification is byte-exact, so
/// callers pass the normalized key to keep stored rows re-verifiable.
pub fn build_registration_message(validator_key: &str) -> String {
    format!("{REGISTRATION_MESSAGE_PREFIX}{validator_key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_concatenates_key_verbatim() {
        let key = format!("0x{}", "AbC1".repeat(24));
        let message = build_registration_message(&key);
        assert_eq!(message, format!("Register Validator: {key}"));
    }
}
