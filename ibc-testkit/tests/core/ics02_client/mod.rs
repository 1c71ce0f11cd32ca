pub mod create_client;
pub mod freeze_client;
pub mod prune_consensus_states;
pub mod reads;
pub mod update_client;
