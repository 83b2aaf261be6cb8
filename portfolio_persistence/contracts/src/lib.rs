pub mod message_log;
