//! GET transport: the seam between the dispatcher and the network.
mod client;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::ClientSettings;
pub use transport::{ReqwestTransport, Transport};
