use core::time::Duration;

use ibc_core_client::types::events::ClientEvent;
use ibc_core_client::types::Height;
use ibc_core_host::types::error::HostError;
use ibc_core_host::types::identifiers::ChainId;
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_primitives::{ModuleEvent, Timestamp};
use typed_builder::TypedBuilder;

use crate::utils::year_2023;

pub const DEFAULT_BLOCK_TIME_SECS: u64 = 3;

/// A mock host chain. It reports a height and a timestamp, and records every
/// event and log line handed to it.
#[derive(TypedBuilder, Clone, Debug)]
pub struct MockHost {
    /// Unique identifier for the chain.
    #[builder(default = ChainId::new("mockgaia-0").expect("Never fails"))]
    pub chain_id: ChainId,
    #[builder(default = Height::new(5).expect("Never fails"))]
    pub latest_height: Height,
    #[builder(default = year_2023())]
    pub latest_timestamp: Timestamp,
    #[builder(default = Duration::from_secs(DEFAULT_BLOCK_TIME_SECS))]
    pub block_time: Duration,
    #[builder(default)]
    pub events: Vec<ModuleEvent>,
    #[builder(default)]
    pub logs: Vec<String>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MockHost {
    /// Produces `blocks` blocks, each one block time after the previous.
    pub fn advance_blocks(&mut self, blocks: u64) {
        let elapsed = u64::try_from(self.block_time.as_nanos() * u128::from(blocks))
            .expect("no overflow");

        self.latest_height = self.latest_height.add(blocks);
        self.latest_timestamp = self
            .latest_timestamp
            .checked_add(Duration::from_nanos(elapsed))
            .expect("no overflow");
    }

    /// Produces as many blocks as it takes for `duration` to pass on the
    /// host clock.
    pub fn advance_time(&mut self, duration: Duration) {
        let block_nanos = self.block_time.as_nanos().max(1);
        let blocks = (duration.as_nanos() + block_nanos - 1) / block_nanos;

        self.advance_blocks(u64::try_from(blocks).expect("no overflow"));
    }

    /// Events emitted so far, decoded as client events. Events of other
    /// modules are skipped.
    pub fn client_events(&self) -> Vec<ClientEvent> {
        self.events
            .iter()
            .filter_map(|event| ClientEvent::try_from(event).ok())
            .collect()
    }

    /// Drops the recorded events and log lines.
    pub fn clear(&mut self) {
        self.events.clear();
        self.logs.clear();
    }
}

impl ValidationContext for MockHost {
    fn host_timestamp(&self) -> Result<Timestamp, HostError> {
        Ok(self.latest_timestamp)
    }
}

impl ExecutionContext for MockHost {
    fn emit_event(&mut self, event: ModuleEvent) {
        self.events.push(event);
    }

    fn log_message(&mut self, message: String) {
        self.logs.push(message);
    }
}
