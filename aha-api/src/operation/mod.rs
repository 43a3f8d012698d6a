//! Operation framework for AHA commands
//!
//! Every gateway command is described by a type implementing
//! [`AhaOperation`]: which `switchcmd` it sends, how its typed request is
//! validated and turned into query parameters, and how the plain-text or
//! XML body is decoded. The per-command decoding rules live in a single
//! table, [`Command::policy`], so the gateway's inconsistent sentinel
//! handling stays visible in one place.

mod command;
pub mod decode;
mod request;

pub use command::{Command, ResponsePolicy};
pub use request::CommandRequest;

use std::fmt::Display;

use crate::error::ApiError;

/// Parameter validation failures
///
/// These are raised synchronously, before a request is built, so a rejected
/// argument never costs a round trip to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Parameter '{parameter}' value '{value}' is out of range ({min}..={max})")]
    RangeError {
        parameter: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Parameter '{parameter}' value '{value}' is invalid: {reason}")]
    InvalidValue {
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("Invalid AIN '{0}'")]
    InvalidAin(String),

    #[error("Invalid session id '{0}'")]
    InvalidSid(String),
}

impl ValidationError {
    pub fn range_error(parameter: &str, min: impl Display, max: impl Display, value: impl Display) -> Self {
        Self::RangeError {
            parameter: parameter.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn invalid_value(parameter: &str, value: impl Display, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Trait for request types that can be checked before sending
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for () {}

/// A single AHA command with a typed request and response
///
/// `AhaSession::execute` drives an operation: [`build_request`] validates
/// the request and turns it into query parameters, the session performs
/// exactly one GET, then hands the body to [`parse_response`].
///
/// [`build_request`]: AhaOperation::build_request
/// [`parse_response`]: AhaOperation::parse_response
pub trait AhaOperation {
    type Request: Validate;
    type Response;

    /// The command this operation sends as `switchcmd`
    const COMMAND: Command;

    /// Validate the request and build its query parameters
    fn build_request(request: &Self::Request) -> Result<CommandRequest, ValidationError>;

    /// Decode the raw response body
    fn parse_response(body: &str) -> Result<Self::Response, ApiError>;
}

/// Define an [`AhaOperation`] with minimal boilerplate
///
/// ```rust,ignore
/// aha_operation! {
///     /// Switch a socket on
///     SetSwitchOnOperation: SetSwitchOn, AinRequest => bool,
///     build: |req| CommandRequest::new(Self::COMMAND).with_ain(&req.ain),
///     parse: |body| decode::flag(Self::COMMAND, body),
/// }
/// ```
#[macro_export]
macro_rules! aha_operation {
    (
        $(#[$meta:meta])*
        $op:ident: $command:ident, $request:ty => $response:ty,
        build: |$req:ident| $build:expr,
        parse: |$body:ident| $parse:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $op;

        impl $crate::operation::AhaOperation for $op {
            type Request = $request;
            type Response = $response;

            const COMMAND: $crate::operation::Command = $crate::operation::Command::$command;

            #[allow(unused_variables)]
            fn build_request(
                $req: &Self::Request,
            ) -> ::std::result::Result<$crate::operation::CommandRequest, $crate::operation::ValidationError> {
                <Self::Request as $crate::operation::Validate>::validate($req)?;
                Ok($build)
            }

            #[allow(unused_variables)]
            fn parse_response($body: &str) -> $crate::Result<Self::Response> {
                $parse
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_display() {
        let error = ValidationError::range_error("hue", 0, 359, 400);
        assert_eq!(
            error.to_string(),
            "Parameter 'hue' value '400' is out of range (0..=359)"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let error = ValidationError::invalid_value("name", "", "must not be empty");
        assert_eq!(
            error.to_string(),
            "Parameter 'name' value '' is invalid: must not be empty"
        );
    }

    #[test]
    fn test_unit_request_always_valid() {
        assert!(().validate().is_ok());
    }
}
