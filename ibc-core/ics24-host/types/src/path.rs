//! Defines the store paths under which the registry keeps its records.
//!
//! Every record of a client lives under `clients/{client_id}/`:
//!
//! | Record | Path |
//! |---|---|
//! | client state | `clients/{client_id}/clientState` |
//! | consensus state | `clients/{client_id}/consensusStates/{height}` |
//! | committer | `clients/{client_id}/committers/{height}` |
use core::str::FromStr;

use derive_more::{Display, From};

use crate::error::PathError;
use crate::identifiers::ClientId;

pub const CLIENT_PREFIX: &str = "clients";
pub const CLIENT_STATE: &str = "clientState";
pub const CONSENSUS_STATE_PREFIX: &str = "consensusStates";
pub const COMMITTER_PREFIX: &str = "committers";

/// The Path enum abstracts out the different sub-paths.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, From, Display)]
pub enum Path {
    ClientState(ClientStatePath),
    ClientConsensusState(ClientConsensusStatePath),
    ClientCommitter(ClientCommitterPath),
}

impl Path {
    pub fn client_id(&self) -> &ClientId {
        match self {
            Self::ClientState(path) => &path.0,
            Self::ClientConsensusState(path) => &path.client_id,
            Self::ClientCommitter(path) => &path.client_id,
        }
    }

    /// into_bytes implementation
    pub fn into_bytes(self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[display(fmt = "{CLIENT_PREFIX}/{_0}/{CLIENT_STATE}")]
pub struct ClientStatePath(pub ClientId);

impl ClientStatePath {
    pub fn new(client_id: ClientId) -> ClientStatePath {
        ClientStatePath(client_id)
    }

    /// Returns the client store prefix under which all the client states are
    /// stored: "clients/".
    pub fn prefix() -> String {
        format!("{CLIENT_PREFIX}/")
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{CLIENT_PREFIX}/{client_id}/{CONSENSUS_STATE_PREFIX}/{height}")]
pub struct ClientConsensusStatePath {
    pub client_id: ClientId,
    pub height: u64,
}

impl ClientConsensusStatePath {
    pub fn new(client_id: ClientId, height: u64) -> ClientConsensusStatePath {
        ClientConsensusStatePath { client_id, height }
    }

    /// Returns the path representing the parent group under which all consensus
    /// states of `client_id` are stored: "clients/{client_id}/consensusStates/".
    pub fn parent(client_id: &ClientId) -> String {
        format!("{CLIENT_PREFIX}/{client_id}/{CONSENSUS_STATE_PREFIX}/")
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{CLIENT_PREFIX}/{client_id}/{COMMITTER_PREFIX}/{height}")]
pub struct ClientCommitterPath {
    pub client_id: ClientId,
    pub height: u64,
}

impl ClientCommitterPath {
    pub fn new(client_id: ClientId, height: u64) -> ClientCommitterPath {
        ClientCommitterPath { client_id, height }
    }

    /// Returns the path representing the parent group under which all
    /// committers of `client_id` are stored: "clients/{client_id}/committers/".
    pub fn parent(client_id: &ClientId) -> String {
        format!("{CLIENT_PREFIX}/{client_id}/{COMMITTER_PREFIX}/")
    }
}

impl TryFrom<&[u8]> for Path {
    type Error = PathError;

    fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
        let path = core::str::from_utf8(key).map_err(|error| PathError::MalformedPathString {
            path: String::from_utf8_lossy(key).into_owned(),
            error,
        })?;
        path.parse()
    }
}

/// The FromStr trait allows paths encoded as strings to be parsed into Paths.
impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_failure = || PathError::ParseFailure {
            path: s.to_string(),
        };

        let components: Vec<&str> = s.split('/').collect();

        match components.as_slice() {
            [CLIENT_PREFIX, client_id, CLIENT_STATE] => {
                let client_id = ClientId::from_str(client_id)?;
                Ok(ClientStatePath(client_id).into())
            }
            [CLIENT_PREFIX, client_id, kind, height] => {
                let client_id = ClientId::from_str(client_id)?;
                let height = parse_height(height).ok_or_else(parse_failure)?;
                match *kind {
                    CONSENSUS_STATE_PREFIX => {
                        Ok(ClientConsensusStatePath { client_id, height }.into())
                    }
                    COMMITTER_PREFIX => Ok(ClientCommitterPath { client_id, height }.into()),
                    _ => Err(parse_failure()),
                }
            }
            _ => Err(parse_failure()),
        }
    }
}

/// Heights are rendered in canonical decimal form: no sign, no leading zeros
/// and never zero.
fn parse_height(s: &str) -> Option<u64> {
    if s.starts_with('0') || s.starts_with('+') {
        return None;
    }
    s.parse::<u64>().ok().filter(|h| *h != 0)
}
