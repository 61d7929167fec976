pub mod abc;
pub mod courier_mail;
pub mod fetch;
pub mod patterns;
pub mod registry;
pub mod sbs;
pub mod traits;
pub mod weatherzone;

pub use fetch::Fetcher;
pub use registry::SourceRegistry;
pub use traits::{NewsSource, Origin};
