//! Simulated wallet connection

use std::time::Duration;

use futures_util::future::BoxFuture;

use polygpt_core::prelude::*;
use polygpt_core::random::short_address;
use polygpt_core::WalletIdentity;

/// Default artificial latency of a wallet connection
pub const DEFAULT_CONNECT_LATENCY: Duration = Duration::from_millis(1500);

/// Something that can hand out a wallet identity
pub trait IdentityConnector: Send + Sync {
    fn connect(&self) -> BoxFuture<'_, Result<WalletIdentity>>;
}

/// Pretends to connect a wallet: waits, then returns a random address
#[derive(Debug, Clone)]
pub struct MockWalletConnector {
    latency: Duration,
}

impl MockWalletConnector {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockWalletConnector {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_LATENCY)
    }
}

impl IdentityConnector for MockWalletConnector {
    fn connect(&self) -> BoxFuture<'_, Result<WalletIdentity>> {
        Box::pin(async move {
            tokio::time::sleep(self.latency).await;
            let address = short_address(&mut rand::thread_rng());
            debug!("mock wallet connected: {}", address);
            Ok(WalletIdentity::new(address))
        })
    }
}
