pub mod common;
pub mod empty_state;
pub mod layout;
