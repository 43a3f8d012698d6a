use crate::types::{Ain, Sid};

use super::Command;

/// Query parameters of one command, minus the session id
///
/// The session id is only attached by [`CommandRequest::query`] at send
/// time so requests can be built and inspected without a live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    command: Command,
    ain: Option<String>,
    params: Vec<(&'static str, String)>,
}

impl CommandRequest {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            ain: None,
            params: Vec::new(),
        }
    }

    /// Address the request to a device, unit or template
    pub fn with_ain(mut self, ain: &Ain) -> Self {
        self.ain = Some(ain.as_str().to_string());
        self
    }

    /// Address the request to an identifier outside the AIN grammar
    /// (trigger identifiers use the same `ain` parameter)
    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.ain = Some(identifier.to_string());
        self
    }

    /// Append an operation parameter; parameters are sent in insertion order
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn ain(&self) -> Option<&str> {
        self.ain.as_deref()
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Look up an operation parameter by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Full query string pairs: `switchcmd`, `sid`, `ain` (if any), then
    /// the operation parameters
    pub fn query<'a>(&'a self, sid: &'a Sid) -> Vec<(&'a str, &'a str)> {
        let mut query = Vec::with_capacity(self.params.len() + 3);
        query.push(("switchcmd", self.command.switchcmd()));
        query.push(("sid", sid.as_str()));
        if let Some(ain) = &self.ain {
            query.push(("ain", ain.as_str()));
        }
        query.extend(self.params.iter().map(|(name, value)| (*name, value.as_str())));
        query
    }
}
