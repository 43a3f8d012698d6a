//! Challenge-response login against the session endpoint
//!
//! The gateway hands out a challenge, the client answers with
//! `challenge-md5(utf16le(challenge-password))` and receives a session id.
//! Newer firmware can issue `2$`-prefixed PBKDF2 challenges; that scheme is
//! not implemented and is reported as [`ApiError::UnsupportedChallenge`].

use aha_http::HttpTransport;
use md5::{Digest, Md5};
use serde::Deserialize;

use crate::config::SessionConfig;
use crate::error::{ApiError, Result};
use crate::types::Sid;
use crate::xml;

/// Version of the login protocol requested from the gateway
const LOGIN_VERSION: &str = "2";

const PBKDF2_PREFIX: &str = "2$";

/// One granted permission from the `<Rights>` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Right {
    pub name: String,
    pub access: u8,
}

/// Parsed `<SessionInfo>` document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub sid: Sid,
    pub challenge: String,
    /// Seconds the gateway refuses further login attempts
    pub block_time: u32,
    pub rights: Vec<Right>,
}

#[derive(Debug, Deserialize)]
struct SessionInfoXml {
    #[serde(rename = "SID")]
    sid: String,
    #[serde(rename = "Challenge", default)]
    challenge: String,
    #[serde(rename = "BlockTime", default)]
    block_time: u32,
    #[serde(rename = "Rights", default)]
    rights: RightsXml,
}

// Name and Access alternate inside <Rights>
#[derive(Debug, Default, Deserialize)]
struct RightsXml {
    #[serde(rename = "Name", default)]
    names: Vec<String>,
    #[serde(rename = "Access", default)]
    access: Vec<u8>,
}

impl SessionInfo {
    pub fn from_xml(xml: &str) -> Result<Self> {
        xml::reject_doctype(xml)?;

        let raw: SessionInfoXml = quick_xml::de::from_str(xml)
            .map_err(|e| ApiError::ParseError(format!("Failed to parse SessionInfo: {}", e)))?;

        let sid = Sid::parse(&raw.sid)
            .map_err(|e| ApiError::ParseError(format!("SessionInfo: {}", e)))?;

        let rights = raw
            .rights
            .names
            .into_iter()
            .zip(raw.rights.access)
            .map(|(name, access)| Right { name, access })
            .collect();

        Ok(SessionInfo {
            sid,
            challenge: raw.challenge.trim().to_string(),
            block_time: raw.block_time,
            rights,
        })
    }

    /// A valid session id with at least one granted right
    pub fn is_authenticated(&self) -> bool {
        self.sid.is_valid_session() && self.rights.iter().any(|r| r.access > 0)
    }

    pub fn uses_pbkdf2(&self) -> bool {
        self.challenge.starts_with(PBKDF2_PREFIX)
    }
}

/// Compute the legacy MD5 login response for a challenge
pub fn challenge_response(challenge: &str, password: &str) -> String {
    let input = format!("{}-{}", challenge, password);
    let utf16le: Vec<u8> = input.encode_utf16().flat_map(u16::to_le_bytes).collect();
    let digest = Md5::digest(&utf16le);
    format!("{}-{}", challenge, hex::encode(digest))
}

fn fetch_session_info<T: HttpTransport>(
    transport: &T,
    url: &str,
    query: &[(&str, &str)],
) -> Result<SessionInfo> {
    let response = transport.get(url, query)?;
    if !response.is_success() {
        return Err(ApiError::HttpStatus(response.status));
    }
    SessionInfo::from_xml(&response.body)
}

/// Run the two-step login
///
/// Returns the issued session id, or the invalid sentinel when the gateway
/// rejected the credentials. No retries are attempted.
pub fn login<T: HttpTransport>(transport: &T, config: &SessionConfig) -> Result<Sid> {
    let url = config.login_url();

    let initial = fetch_session_info(transport, &url, &[("version", LOGIN_VERSION)])?;
    if initial.is_authenticated() {
        tracing::info!(host = %config.hostname, "gateway granted a session without credentials");
        return Ok(initial.sid);
    }
    if initial.block_time > 0 {
        tracing::warn!(
            host = %config.hostname,
            block_time = initial.block_time,
            "gateway is blocking login attempts"
        );
    }
    if initial.uses_pbkdf2() {
        tracing::warn!(host = %config.hostname, "PBKDF2 login challenge is not supported");
        return Err(ApiError::UnsupportedChallenge(initial.challenge));
    }

    let response = challenge_response(&initial.challenge, &config.password);
    let mut query = vec![("version", LOGIN_VERSION), ("response", response.as_str())];
    if let Some(username) = config.username.as_deref() {
        query.push(("username", username));
    }

    let info = fetch_session_info(transport, &url, &query)?;
    if info.is_authenticated() {
        tracing::info!(host = %config.hostname, rights = info.rights.len(), "logged in");
        Ok(info.sid)
    } else {
        tracing::warn!(
            host = %config.hostname,
            block_time = info.block_time,
            "login rejected"
        );
        Ok(Sid::invalid())
    }
}

/// Invalidate `sid` on the gateway
pub fn logout<T: HttpTransport>(transport: &T, config: &SessionConfig, sid: &Sid) -> Result<()> {
    let url = config.login_url();
    let response = transport.get(
        &url,
        &[("version", LOGIN_VERSION), ("logout", "1"), ("sid", sid.as_str())],
    )?;
    if !response.is_success() {
        return Err(ApiError::HttpStatus(response.status));
    }
    tracing::info!(host = %config.hostname, "logged out");
    Ok(())
}
