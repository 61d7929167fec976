pub mod digest_service;
pub mod save_service;
pub mod snapshot_service;

pub use digest_service::DigestService;
pub use save_service::SaveService;
pub use snapshot_service::SnapshotService;
