use ibc_core_client::types::{CommitmentRoot, ValidatorSetCommitment};
use ibc_primitives::Timestamp;
use sha2::{Digest, Sha256};

/// Returns a `Timestamp` representation of beginning of year 2023.
///
/// Hosts and fixtures start from this instant by default so that two of them
/// built one after the other agree on the time.
pub fn year_2023() -> Timestamp {
    // Sun Jan 01 2023 00:00:00 GMT+0000
    Timestamp::from_unix_timestamp(1_672_531_200, 0).expect("should be a valid time")
}

/// A commitment root derived from `seed`: the SHA-256 digest of it.
pub fn dummy_root(seed: &str) -> CommitmentRoot {
    CommitmentRoot::from(Sha256::digest(seed.as_bytes()).to_vec())
}

/// A validator set commitment derived from `seed`, distinct from the root
/// derived from the same seed.
pub fn dummy_validator_set_commitment(seed: &str) -> ValidatorSetCommitment {
    let mut hasher = Sha256::new();
    hasher.update(b"validators/");
    hasher.update(seed.as_bytes());
    ValidatorSetCommitment::from(hasher.finalize().to_vec())
}
