//! High-level API for the play-zones web service
//!
//! This crate provides a type-safe, trait-based API for talking to a
//! play-zones server. It uses the private `web-client` crate for
//! low-level HTTP communication.
//!
//! Two operations exist, matching the server's endpoints:
//!
//! ```rust,no_run
//! use zones_api::{
//!     GetStateOperation, GetStateRequest, TransferOperation, TransferRequest, ZonesClient,
//! };
//!
//! let client = ZonesClient::new("http://localhost:9090/spotify");
//!
//! // Fetch the full state document
//! let state = client.execute::<GetStateOperation>(&GetStateRequest)?;
//!
//! // Move playback to the first device
//! if let Some(device) = state.devices.first() {
//!     let devices = client.execute::<TransferOperation>(&TransferRequest {
//!         id: device.id.clone(),
//!     })?;
//!     println!("{} devices after transfer", devices.len());
//! }
//! # Ok::<(), zones_api::ApiError>(())
//! ```

pub mod client;
pub mod error;
pub mod operation;
pub mod operations;
pub mod payload;

pub use client::ZonesClient;
pub use error::{ApiError, Result};
pub use operation::{HttpMethod, ZonesOperation};
pub use operations::{GetStateOperation, GetStateRequest, TransferOperation, TransferRequest};
pub use payload::{DevicePayload, PlayingPayload, WebStatePayload};
