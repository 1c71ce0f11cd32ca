use std::time::Duration;

use ibc_core_client::types::msgs::{MsgCreateClient, MsgFreezeClient, MsgUpdateClient};
use ibc_core_client::types::{Committer, ConsensusState, Height};
use ibc_core_host::types::identifiers::{ChainId, ClientId};
use ibc_primitives::Timestamp;
use typed_builder::TypedBuilder;

use crate::hosts::DEFAULT_BLOCK_TIME_SECS;
use crate::utils::{dummy_root, dummy_validator_set_commitment, year_2023};

pub const DEFAULT_TRUSTING_PERIOD: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Builds the records and messages of one client tracking a counterparty
/// chain that produces a block every `block_time` from `genesis_timestamp`.
///
/// Records are derived from a seed string: the same `(height, seed)` pair
/// always yields the same consensus state and committer, a different seed a
/// conflicting one.
#[derive(TypedBuilder, Clone, Debug)]
pub struct ClientFixture {
    #[builder(default = ClientId::new("07-tendermint", 0).expect("Never fails"))]
    pub client_id: ClientId,
    #[builder(default = ChainId::new("counterparty-0").expect("Never fails"))]
    pub chain_id: ChainId,
    #[builder(default = DEFAULT_TRUSTING_PERIOD)]
    pub trusting_period: Duration,
    #[builder(default = year_2023())]
    pub genesis_timestamp: Timestamp,
    #[builder(default = Duration::from_secs(DEFAULT_BLOCK_TIME_SECS))]
    pub block_time: Duration,
}

impl Default for ClientFixture {
    fn default() -> Self {
        Self::builder().build()
    }
}

pub fn height(h: u64) -> Height {
    Height::new(h).expect("non-zero height")
}

impl ClientFixture {
    /// The counterparty's block time at `height`.
    pub fn timestamp_at(&self, height: u64) -> Timestamp {
        let blocks = u32::try_from(height.saturating_sub(1)).expect("no overflow");
        self.genesis_timestamp
            .checked_add(self.block_time * blocks)
            .expect("no overflow")
    }

    pub fn consensus_state(&self, h: u64, seed: &str) -> ConsensusState {
        ConsensusState::new(
            height(h),
            dummy_root(seed),
            self.timestamp_at(h),
            dummy_validator_set_commitment(&format!("{seed}/next")),
        )
    }

    pub fn committer(&self, h: u64, seed: &str) -> Committer {
        Committer::new(height(h), dummy_validator_set_commitment(seed))
    }

    pub fn msg_create_client(&self, h: u64, seed: &str) -> MsgCreateClient {
        MsgCreateClient::new(
            self.client_id.clone(),
            self.chain_id.clone(),
            self.trusting_period,
            self.consensus_state(h, seed),
            self.committer(h, seed),
        )
    }

    pub fn msg_update_client(&self, h: u64, seed: &str) -> MsgUpdateClient {
        MsgUpdateClient::new(
            self.client_id.clone(),
            height(h),
            self.consensus_state(h, seed),
            self.committer(h, seed),
        )
    }

    pub fn msg_freeze_client(&self, h: u64) -> MsgFreezeClient {
        MsgFreezeClient::new(self.client_id.clone(), height(h))
    }
}
