//! Domain model for zone state

mod device;
mod device_id;
mod snapshot;
mod track;

pub use device::Device;
pub use device_id::DeviceId;
pub use snapshot::Snapshot;
pub use track::Track;
