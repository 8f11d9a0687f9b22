//! Error message composition.

use crate::{Error, Fault, Response};

/// Build a single message from a fault and the response status line.
///
/// Only the parts that are present contribute, separated by one space:
///
/// ```text
/// Fault reason is "R". Fault detail is "D". HTTP response code is "C". HTTP response message is "T".
/// ```
///
/// Nothing present yields an empty string.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use faultline_core::{Fault, Response, compose_error};
///
/// let fault = Fault::new().with_detail("Disk locked");
/// let response = Response::new(409, HashMap::new(), ());
///
/// assert_eq!(
///     compose_error(Some(&fault), Some(&response)),
///     r#"Fault detail is "Disk locked". HTTP response code is "409". HTTP response message is "Conflict"."#,
/// );
/// ```
#[must_use]
pub fn compose_error<B>(fault: Option<&Fault>, response: Option<&Response<B>>) -> String {
    let mut segments = Vec::with_capacity(4);

    if let Some(fault) = fault {
        if let Some(reason) = fault.reason() {
            segments.push(format!("Fault reason is \"{reason}\"."));
        }
        if let Some(detail) = fault.detail() {
            segments.push(format!("Fault detail is \"{detail}\"."));
        }
    }
    if let Some(response) = response {
        segments.push(format!("HTTP response code is \"{}\".", response.status()));
        segments.push(format!(
            "HTTP response message is \"{}\".",
            response.status_text()
        ));
    }

    segments.join(" ")
}

/// Build the [`Error::Remote`] reported to callers.
#[must_use]
pub fn build_error<B>(fault: Option<&Fault>, response: Option<&Response<B>>) -> Error {
    Error::remote(
        compose_error(fault, response),
        response.map(Response::status),
        fault.cloned(),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::check;

    use super::*;

    fn response(status: u16) -> Response<()> {
        Response::new(status, HashMap::new(), ())
    }

    #[test]
    fn compose_all_segments() {
        let fault = Fault::new()
            .with_reason("Operation Failed")
            .with_detail("[Cannot remove VM. VM is running.]");

        insta::assert_snapshot!(
            compose_error(Some(&fault), Some(&response(400))),
            @r#"Fault reason is "Operation Failed". Fault detail is "[Cannot remove VM. VM is running.]". HTTP response code is "400". HTTP response message is "Bad Request"."#
        );
    }

    #[test]
    fn compose_reason_only() {
        let fault = Fault::new().with_reason("Operation Failed");

        insta::assert_snapshot!(
            compose_error(Some(&fault), Some(&response(500))),
            @r#"Fault reason is "Operation Failed". HTTP response code is "500". HTTP response message is "Internal Server Error"."#
        );
    }

    #[test]
    fn compose_fault_without_response() {
        let fault = Fault::new().with_reason("R").with_detail("D");

        check!(
            compose_error::<()>(Some(&fault), None) == r#"Fault reason is "R". Fault detail is "D"."#
        );
    }

    #[test]
    fn compose_response_without_fault() {
        let response = response(404).with_status_text("404 Not Found");

        check!(
            compose_error(None, Some(&response))
                == r#"HTTP response code is "404". HTTP response message is "404 Not Found"."#
        );
    }

    #[test]
    fn compose_empty_fault_and_response() {
        check!(compose_error::<()>(Some(&Fault::new()), None) == "");
        check!(compose_error::<()>(None, None) == "");
    }

    #[test]
    fn build_error_carries_status_and_fault() {
        let fault = Fault::new().with_detail("D");
        let err = build_error(Some(&fault), Some(&response(409)));

        check!(err.status() == Some(409));
        check!(err.fault() == Some(&fault));
        check!(
            err.to_string()
                == r#"Fault detail is "D". HTTP response code is "409". HTTP response message is "Conflict"."#
        );
    }
}
