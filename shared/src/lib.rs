pub mod ago;
pub mod array;
pub mod endpoint;
pub mod error;
pub mod metrics;
pub mod monitor;
pub mod session;
pub mod status;
pub mod ttl;
pub mod window;
