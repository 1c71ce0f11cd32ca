//! Types for the events emitted by the client registry.

use core::str::FromStr;

use derive_more::From;
use ibc_core_host_types::error::DecodingError;
use ibc_core_host_types::identifiers::{ChainId, ClientId};
use ibc_primitives::{ModuleEvent, ModuleEventAttribute};

use crate::height::Height;

/// Client event types
pub const CREATE_CLIENT_EVENT: &str = "create_client";
pub const UPDATE_CLIENT_EVENT: &str = "update_client";
pub const CLIENT_MISBEHAVIOUR_EVENT: &str = "client_misbehaviour";
pub const PRUNE_CONSENSUS_STATES_EVENT: &str = "prune_consensus_states";

/// The content of the `key` field for the attribute containing the client identifier.
pub const CLIENT_ID_ATTRIBUTE_KEY: &str = "client_id";

/// The content of the `key` field for the attribute containing the chain identifier.
pub const CHAIN_ID_ATTRIBUTE_KEY: &str = "chain_id";

/// The content of the `key` field for the attribute containing the height.
pub const CONSENSUS_HEIGHT_ATTRIBUTE_KEY: &str = "consensus_height";

/// The content of the `key` field for the attribute containing the height the client was frozen at.
pub const FROZEN_HEIGHT_ATTRIBUTE_KEY: &str = "frozen_height";

/// The content of the `key` field for the attribute containing the heights of removed consensus states.
pub const PRUNED_HEIGHTS_ATTRIBUTE_KEY: &str = "pruned_heights";

fn find_attribute<'a>(event: &'a ModuleEvent, key: &str) -> Result<&'a str, DecodingError> {
    event
        .attribute(key)
        .ok_or_else(|| DecodingError::missing_raw_data(format!("missing attribute `{key}`")))
}

fn parse_height(value: &str) -> Result<Height, DecodingError> {
    Height::from_str(value)
        .map_err(|e| DecodingError::invalid_raw_data(format!("invalid attribute value: {e}")))
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, From, PartialEq, Eq)]
struct ClientIdAttribute {
    client_id: ClientId,
}

impl From<ClientIdAttribute> for ModuleEventAttribute {
    fn from(attr: ClientIdAttribute) -> Self {
        (CLIENT_ID_ATTRIBUTE_KEY, attr.client_id).into()
    }
}

impl TryFrom<&ModuleEvent> for ClientIdAttribute {
    type Error = DecodingError;

    fn try_from(event: &ModuleEvent) -> Result<Self, Self::Error> {
        let client_id = ClientId::from_str(find_attribute(event, CLIENT_ID_ATTRIBUTE_KEY)?)?;
        Ok(Self { client_id })
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, From, PartialEq, Eq)]
struct ChainIdAttribute {
    chain_id: ChainId,
}

impl From<ChainIdAttribute> for ModuleEventAttribute {
    fn from(attr: ChainIdAttribute) -> Self {
        (CHAIN_ID_ATTRIBUTE_KEY, attr.chain_id).into()
    }
}

impl TryFrom<&ModuleEvent> for ChainIdAttribute {
    type Error = DecodingError;

    fn try_from(event: &ModuleEvent) -> Result<Self, Self::Error> {
        let chain_id = ChainId::from_str(find_attribute(event, CHAIN_ID_ATTRIBUTE_KEY)?)?;
        Ok(Self { chain_id })
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, From, PartialEq, Eq)]
struct ConsensusHeightAttribute {
    consensus_height: Height,
}

impl From<ConsensusHeightAttribute> for ModuleEventAttribute {
    fn from(attr: ConsensusHeightAttribute) -> Self {
        (CONSENSUS_HEIGHT_ATTRIBUTE_KEY, attr.consensus_height).into()
    }
}

impl TryFrom<&ModuleEvent> for ConsensusHeightAttribute {
    type Error = DecodingError;

    fn try_from(event: &ModuleEvent) -> Result<Self, Self::Error> {
        let consensus_height =
            parse_height(find_attribute(event, CONSENSUS_HEIGHT_ATTRIBUTE_KEY)?)?;
        Ok(Self { consensus_height })
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, From, PartialEq, Eq)]
struct FrozenHeightAttribute {
    frozen_height: Height,
}

impl From<FrozenHeightAttribute> for ModuleEventAttribute {
    fn from(attr: FrozenHeightAttribute) -> Self {
        (FROZEN_HEIGHT_ATTRIBUTE_KEY, attr.frozen_height).into()
    }
}

impl TryFrom<&ModuleEvent> for FrozenHeightAttribute {
    type Error = DecodingError;

    fn try_from(event: &ModuleEvent) -> Result<Self, Self::Error> {
        let frozen_height = parse_height(find_attribute(event, FROZEN_HEIGHT_ATTRIBUTE_KEY)?)?;
        Ok(Self { frozen_height })
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, From, PartialEq, Eq)]
struct PrunedHeightsAttribute {
    pruned_heights: Vec<Height>,
}

impl From<PrunedHeightsAttribute> for ModuleEventAttribute {
    fn from(attr: PrunedHeightsAttribute) -> Self {
        let pruned_heights: Vec<String> = attr
            .pruned_heights
            .into_iter()
            .map(|height| height.to_string())
            .collect();
        (PRUNED_HEIGHTS_ATTRIBUTE_KEY, pruned_heights.join(",")).into()
    }
}

impl TryFrom<&ModuleEvent> for PrunedHeightsAttribute {
    type Error = DecodingError;

    fn try_from(event: &ModuleEvent) -> Result<Self, Self::Error> {
        let value = find_attribute(event, PRUNED_HEIGHTS_ATTRIBUTE_KEY)?;
        let pruned_heights = if value.is_empty() {
            Vec::new()
        } else {
            value
                .split(',')
                .map(parse_height)
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(Self { pruned_heights })
    }
}

/// CreateClient event signals the registration of a new light client.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateClient {
    client_id: ClientIdAttribute,
    chain_id: ChainIdAttribute,
    consensus_height: ConsensusHeightAttribute,
}

impl CreateClient {
    pub fn new(client_id: ClientId, chain_id: ChainId, consensus_height: Height) -> Self {
        Self {
            client_id: ClientIdAttribute::from(client_id),
            chain_id: ChainIdAttribute::from(chain_id),
            consensus_height: ConsensusHeightAttribute::from(consensus_height),
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id.client_id
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id.chain_id
    }

    pub fn consensus_height(&self) -> &Height {
        &self.consensus_height.consensus_height
    }

    pub fn event_type(&self) -> &str {
        CREATE_CLIENT_EVENT
    }
}

impl From<CreateClient> for ModuleEvent {
    fn from(c: CreateClient) -> Self {
        ModuleEvent::new(CREATE_CLIENT_EVENT)
            .with_attribute(c.client_id)
            .with_attribute(c.chain_id)
            .with_attribute(c.consensus_height)
    }
}

/// UpdateClient event signals that a client advanced to a new consensus height.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateClient {
    client_id: ClientIdAttribute,
    consensus_height: ConsensusHeightAttribute,
}

impl UpdateClient {
    pub fn new(client_id: ClientId, consensus_height: Height) -> Self {
        Self {
            client_id: ClientIdAttribute::from(client_id),
            consensus_height: ConsensusHeightAttribute::from(consensus_height),
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id.client_id
    }

    pub fn consensus_height(&self) -> &Height {
        &self.consensus_height.consensus_height
    }

    pub fn event_type(&self) -> &str {
        UPDATE_CLIENT_EVENT
    }
}

impl From<UpdateClient> for ModuleEvent {
    fn from(u: UpdateClient) -> Self {
        ModuleEvent::new(UPDATE_CLIENT_EVENT)
            .with_attribute(u.client_id)
            .with_attribute(u.consensus_height)
    }
}

/// ClientMisbehaviour event signals that a client was frozen.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientMisbehaviour {
    client_id: ClientIdAttribute,
    frozen_height: FrozenHeightAttribute,
}

impl ClientMisbehaviour {
    pub fn new(client_id: ClientId, frozen_height: Height) -> Self {
        Self {
            client_id: ClientIdAttribute::from(client_id),
            frozen_height: FrozenHeightAttribute::from(frozen_height),
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id.client_id
    }

    pub fn frozen_height(&self) -> &Height {
        &self.frozen_height.frozen_height
    }

    pub fn event_type(&self) -> &str {
        CLIENT_MISBEHAVIOUR_EVENT
    }
}

impl From<ClientMisbehaviour> for ModuleEvent {
    fn from(c: ClientMisbehaviour) -> Self {
        ModuleEvent::new(CLIENT_MISBEHAVIOUR_EVENT)
            .with_attribute(c.client_id)
            .with_attribute(c.frozen_height)
    }
}

/// PruneConsensusStates event lists the expired heights removed from a client.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PruneConsensusStates {
    client_id: ClientIdAttribute,
    pruned_heights: PrunedHeightsAttribute,
}

impl PruneConsensusStates {
    pub fn new(client_id: ClientId, pruned_heights: Vec<Height>) -> Self {
        Self {
            client_id: ClientIdAttribute::from(client_id),
            pruned_heights: PrunedHeightsAttribute::from(pruned_heights),
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id.client_id
    }

    pub fn pruned_heights(&self) -> &[Height] {
        &self.pruned_heights.pruned_heights
    }

    pub fn event_type(&self) -> &str {
        PRUNE_CONSENSUS_STATES_EVENT
    }
}

impl From<PruneConsensusStates> for ModuleEvent {
    fn from(p: PruneConsensusStates) -> Self {
        ModuleEvent::new(PRUNE_CONSENSUS_STATES_EVENT)
            .with_attribute(p.client_id)
            .with_attribute(p.pruned_heights)
    }
}

/// Every event the registry emits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, From, PartialEq, Eq)]
pub enum ClientEvent {
    CreateClient(CreateClient),
    UpdateClient(UpdateClient),
    ClientMisbehaviour(ClientMisbehaviour),
    PruneConsensusStates(PruneConsensusStates),
}

impl ClientEvent {
    pub fn event_type(&self) -> &str {
        match self {
            Self::CreateClient(e) => e.event_type(),
            Self::UpdateClient(e) => e.event_type(),
            Self::ClientMisbehaviour(e) => e.event_type(),
            Self::PruneConsensusStates(e) => e.event_type(),
        }
    }
}

impl From<ClientEvent> for ModuleEvent {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::CreateClient(e) => e.into(),
            ClientEvent::UpdateClient(e) => e.into(),
            ClientEvent::ClientMisbehaviour(e) => e.into(),
            ClientEvent::PruneConsensusStates(e) => e.into(),
        }
    }
}

impl TryFrom<&ModuleEvent> for ClientEvent {
    type Error = DecodingError;

    fn try_from(event: &ModuleEvent) -> Result<Self, Self::Error> {
        let client_id = ClientIdAttribute::try_from(event)?;
        let decoded = match event.kind.as_str() {
            CREATE_CLIENT_EVENT => CreateClient {
                client_id,
                chain_id: event.try_into()?,
                consensus_height: event.try_into()?,
            }
            .into(),
            UPDATE_CLIENT_EVENT => UpdateClient {
                client_id,
                consensus_height: event.try_into()?,
            }
            .into(),
            CLIENT_MISBEHAVIOUR_EVENT => ClientMisbehaviour {
                client_id,
                frozen_height: event.try_into()?,
            }
            .into(),
            PRUNE_CONSENSUS_STATES_EVENT => PruneConsensusStates {
                client_id,
                pruned_heights: event.try_into()?,
            }
            .into(),
            kind => {
                return Err(DecodingError::invalid_raw_data(format!(
                    "invalid event kind: `{kind}`"
                )))
            }
        };

        Ok(decoded)
    }
}
