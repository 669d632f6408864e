//! Mock ledger simulator
//!
//! Produces a rolling window of synthetic blocks and a set of synthetic
//! network statistics for the dashboard. [`LedgerTimer`] drives it while the
//! dashboard is visible.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use polygpt_core::prelude::*;
use polygpt_core::random::{base36_string, round_to, short_address};
use polygpt_core::{Block, NetworkStats};

use crate::message::Message;

/// Number of blocks kept on screen
pub const BLOCK_WINDOW: usize = 5;

/// Height of the newest initial block
pub const INITIAL_HEIGHT: u64 = 6_540_320;

/// Spacing between the initial blocks' timestamps
const INITIAL_BLOCK_SPACING_MS: i64 = 2000;

const HASH_LEN: usize = 26;

/// Synthetic block and statistics feed
#[derive(Debug)]
pub struct LedgerSimulator {
    rng: StdRng,
    blocks: VecDeque<Block>,
    stats: NetworkStats,
}

impl Default for LedgerSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerSimulator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let now = Local::now();
        let blocks = (0..BLOCK_WINDOW as u64)
            .map(|i| {
                let age = ChronoDuration::milliseconds(i as i64 * INITIAL_BLOCK_SPACING_MS);
                let timestamp = now - age;
                random_block(&mut rng, INITIAL_HEIGHT - i, timestamp)
            })
            .collect();

        Self {
            rng,
            blocks,
            stats: NetworkStats::default(),
        }
    }

    /// Blocks, newest first
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn newest_height(&self) -> Option<u64> {
        self.blocks.front().map(|b| b.height)
    }

    pub fn stats(&self) -> &NetworkStats {
        &self.stats
    }

    /// Advance one step: prepend a block, trim the window, refresh stats
    pub fn tick(&mut self) {
        let height = self.newest_height().map_or(INITIAL_HEIGHT, |h| h + 1);
        let block = random_block(&mut self.rng, height, Local::now());
        self.blocks.push_front(block);
        self.blocks.truncate(BLOCK_WINDOW);

        let r = &mut self.rng;
        self.stats = NetworkStats {
            tps: round_to(40.0 + r.gen::<f64>() * 10.0, 1),
            gas_price: round_to(25.0 + r.gen::<f64>() * 10.0, 1),
            qubit_coherence: round_to(99.90 + r.gen::<f64>() * 0.09, 2),
            entanglement_flux: round_to(4.1 + r.gen::<f64>() * 0.5, 1),
            ..self.stats
        };
        trace!(height, "ledger tick");
    }
}

fn random_block(rng: &mut StdRng, height: u64, timestamp: chrono::DateTime<Local>) -> Block {
    Block {
        height,
        hash: base36_string(rng, HASH_LEN),
        timestamp,
        transactions: rng.gen_range(10..60),
        validator: short_address(rng),
    }
}

/// Scoped periodic driver for the simulator
///
/// Sends [`Message::LedgerTick`] every `interval` until dropped.
#[derive(Debug)]
pub struct LedgerTimer {
    handle: JoinHandle<()>,
}

impl LedgerTimer {
    pub fn start(interval: Duration, tx: mpsc::Sender<Message>) -> Self {
        debug!("Starting ledger timer ({:?})", interval);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(Message::LedgerTick).await.is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Stop ticking now
    ///
    /// Consuming the guard runs `Drop`, which aborts the task.
    pub fn stop(self) {}

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for LedgerTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Ledger timer stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_stats_in_range(stats: &NetworkStats) {
        assert!((40.0..=50.0).contains(&stats.tps), "tps {}", stats.tps);
        assert!((25.0..=35.0).contains(&stats.gas_price));
        assert!((99.90..=99.99).contains(&stats.qubit_coherence));
        assert!((4.1..=4.6).contains(&stats.entanglement_flux));
    }

    #[test]
    fn test_initial_window() {
        let sim = LedgerSimulator::with_seed(3);
        let heights: Vec<u64> = sim.blocks().map(|b| b.height).collect();
        assert_eq!(
            heights,
            vec![6_540_320, 6_540_319, 6_540_318, 6_540_317, 6_540_316]
        );
        assert_eq!(*sim.stats(), NetworkStats::default());

        let blocks: Vec<&Block> = sim.blocks().collect();
        assert!(blocks[0].timestamp > blocks[4].timestamp);
    }

    #[test]
    fn test_tick_prepends_and_truncates() {
        let mut sim = LedgerSimulator::with_seed(3);
        for n in 1..=12u64 {
            sim.tick();
            assert_eq!(sim.block_count(), BLOCK_WINDOW);
            assert_eq!(sim.newest_height(), Some(INITIAL_HEIGHT + n));

            let heights: Vec<u64> = sim.blocks().map(|b| b.height).collect();
            for pair in heights.windows(2) {
                assert_eq!(pair[0], pair[1] + 1);
            }
            assert_stats_in_range(sim.stats());
        }
    }

    #[test]
    fn test_block_fields_in_range() {
        let mut sim = LedgerSimulator::with_seed(11);
        for _ in 0..50 {
            sim.tick();
        }
        for block in sim.blocks() {
            assert!((10..=59).contains(&block.transactions));
            assert_eq!(block.hash.len(), 26);
            assert!(block.validator.starts_with("0x"));
            assert_eq!(block.validator.len(), 17);
        }
    }

    #[test]
    fn test_counters_carry_over() {
        let mut sim = LedgerSimulator::with_seed(5);
        sim.tick();
        sim.tick();
        assert_eq!(sim.stats().active_nodes, 12_408);
        assert_eq!(sim.stats().total_inferences, 1_450_283);
    }

    #[test]
    fn test_stats_rounding() {
        let mut sim = LedgerSimulator::with_seed(8);
        for _ in 0..20 {
            sim.tick();
            let tps = sim.stats().tps;
            assert!((tps * 10.0 - (tps * 10.0).round()).abs() < 1e-9);
            let coherence = sim.stats().qubit_coherence;
            assert!((coherence * 100.0 - (coherence * 100.0).round()).abs() < 1e-6);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_sends_ticks() {
        let (tx, mut rx) = mpsc::channel(8);
        let timer = LedgerTimer::start(Duration::from_millis(3000), tx);

        tokio::time::sleep(Duration::from_millis(6100)).await;
        assert!(matches!(rx.recv().await, Some(Message::LedgerTick)));
        assert!(matches!(rx.recv().await, Some(Message::LedgerTick)));
        assert!(timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_stops_when_dropped() {
        let (tx, mut rx) = mpsc::channel(8);
        let timer = LedgerTimer::start(Duration::from_millis(3000), tx);

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(matches!(rx.recv().await, Some(Message::LedgerTick)));

        drop(timer);
        // The aborted task releases the only sender, closing the channel
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_stop_releases_task() {
        let (tx, mut rx) = mpsc::channel(8);
        LedgerTimer::start(Duration::from_millis(3000), tx).stop();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.recv().await.is_none());
    }
}
