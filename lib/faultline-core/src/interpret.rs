//! Fault and action interpretation of a buffered body.
//!
//! Each function is one independent decode pass over the same bytes.

use crate::model::{ACTION_ROOT, FAULT_ROOT};
use crate::xml::{self, Decoded};
use crate::{Action, Fault};

/// Decode the body as a `<fault>` document.
#[must_use]
pub fn decode_fault(bytes: &[u8]) -> Decoded<Fault> {
    xml::decode(bytes, FAULT_ROOT)
}

/// Decode the body as an `<action>` document.
#[must_use]
pub fn decode_action(bytes: &[u8]) -> Decoded<Action> {
    xml::decode(bytes, ACTION_ROOT)
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn fault_with_reason_and_detail() {
        let bytes = b"<fault><reason>Operation Failed</reason><detail>Disk locked</detail></fault>";

        let_assert!(Decoded::Matched(fault) = decode_fault(bytes));
        check!(fault.reason() == Some("Operation Failed"));
        check!(fault.detail() == Some("Disk locked"));
    }

    #[test]
    fn fault_fields_are_optional() {
        let_assert!(Decoded::Matched(fault) = decode_fault(b"<fault><detail>only</detail></fault>"));
        check!(fault.reason().is_none());
        check!(fault.detail() == Some("only"));
    }

    #[test]
    fn action_is_not_a_fault() {
        check!(decode_fault(b"<action><status>complete</status></action>").is_shape_mismatch());
    }

    #[test]
    fn fault_is_not_an_action() {
        check!(decode_action(b"<fault><reason>Boom</reason></fault>").is_shape_mismatch());
    }

    #[test]
    fn action_with_nested_fault() {
        let bytes = b"<action>\
            <status>failed</status>\
            <fault><reason>Nested</reason><detail>inside action</detail></fault>\
            </action>";

        let_assert!(Decoded::Matched(action) = decode_action(bytes));
        check!(action.status() == Some("failed"));
        let_assert!(Some(fault) = action.fault());
        check!(fault.reason() == Some("Nested"));
        check!(fault.detail() == Some("inside action"));
    }

    #[test]
    fn malformed_action() {
        let_assert!(Decoded::Malformed(err) = decode_action(b"<action><status>complete</action>"));
        check!(err.is_malformed());
    }

    #[test]
    fn same_bytes_decode_twice() {
        let bytes = b"<action><status>complete</status></action>";

        check!(decode_fault(bytes).is_shape_mismatch());
        let_assert!(Decoded::Matched(action) = decode_action(bytes));
        check!(action.fault().is_none());
    }
}
