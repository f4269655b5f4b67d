//! Property-based tests for identifier obfuscation.

use proptest::prelude::*;

use super::codec::{decode_id, encode_id};
use super::error::ObfuscationError;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Decoding an encoded identifier yields the identifier.
    #[test]
    fn prop_roundtrip(id in any::<String>()) {
        prop_assert_eq!(decode_id(&encode_id(&id)).unwrap(), id);
    }

    /// Encoded output only uses the padded base64 alphabet.
    #[test]
    fn prop_encoded_alphabet(id in "[ -~]{0,64}") {
        let token = encode_id(&id);
        prop_assert_eq!(token.len() % 4, 0);
        prop_assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')));
    }

    /// Text containing characters outside the base64 alphabet never decodes.
    #[test]
    fn prop_foreign_characters_rejected(
        prefix in "[A-Za-z0-9]{0,8}",
        bad in "[!#$%&*(),.:;<>?@ -]",
    ) {
        let token = format!("{prefix}{bad}AAA");
        prop_assert!(matches!(
            decode_id(&token),
            Err(ObfuscationError::MalformedInput(_))
        ));
    }
}
