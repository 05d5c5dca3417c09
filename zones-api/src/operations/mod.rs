//! Operations against the play-zones server

pub mod get_state;
pub mod transfer;

pub use get_state::{GetStateOperation, GetStateRequest};
pub use transfer::{TransferOperation, TransferRequest};
