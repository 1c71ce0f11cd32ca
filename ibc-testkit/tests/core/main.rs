pub mod ics02_client;
