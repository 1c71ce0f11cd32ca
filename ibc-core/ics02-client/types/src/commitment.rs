//! Opaque byte commitments recorded for a counterparty chain.

use core::fmt;

use subtle_encoding::{Encoding, Hex};

use crate::consensus_state::ConsensusState;
use crate::height::Height;

fn fmt_hex(name: &str, bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let hex = Hex::upper_case()
        .encode_to_string(bytes)
        .map_err(|_| fmt::Error)?;
    f.debug_tuple(name).field(&hex).finish()
}

/// Encodes a commitment root; most often a Merkle tree root hash.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CommitmentRoot {
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "ibc_primitives::serializers::ser_hex_upper",
            deserialize_with = "ibc_primitives::serializers::de_hex_upper"
        )
    )]
    bytes: Vec<u8>,
}

impl fmt::Debug for CommitmentRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex("CommitmentRoot", &self.bytes, f)
    }
}

impl CommitmentRoot {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: Vec::from(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for CommitmentRoot {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// Commitment to a validator set, e.g. the hash of the next validators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ValidatorSetCommitment {
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "ibc_primitives::serializers::ser_hex_upper",
            deserialize_with = "ibc_primitives::serializers::de_hex_upper"
        )
    )]
    bytes: Vec<u8>,
}

impl fmt::Debug for ValidatorSetCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex("ValidatorSetCommitment", &self.bytes, f)
    }
}

impl ValidatorSetCommitment {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: Vec::from(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for ValidatorSetCommitment {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// A commitment root that passed verification at `height`.
///
/// Only stored consensus states yield a `VerifiedRoot`, so holding one is
/// the proof that the root was accepted by the registry.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedRoot {
    height: Height,
    root: CommitmentRoot,
}

impl VerifiedRoot {
    /// Projects a stored consensus state onto its root.
    pub fn from_consensus_state(consensus_state: &ConsensusState) -> Self {
        Self {
            height: consensus_state.height,
            root: consensus_state.root.clone(),
        }
    }

    pub fn height(&self) -> Height {
        self.height
    }

    pub fn root(&self) -> &CommitmentRoot {
        &self.root
    }

    pub fn into_root(self) -> CommitmentRoot {
        self.root
    }
}
