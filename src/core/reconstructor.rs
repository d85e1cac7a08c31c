//! Transaction reconstruction from the scanner event stream
//!
//! The scale reports cumulative weights, and the reading attached to a scan
//! is taken *before* the scanned item is put down. The weight of an item is
//! therefore only known at the next reading: either the next scan or the end
//! marker. The reconstructor keeps the item whose weight is still unknown in
//! a pending slot and settles it when that next reading arrives.
//!
//! ```text
//! start          running = 0, pending = (none)
//! A 100          (none) gets 100 - 0, discarded; pending = A; running = 100
//! B 150          A gets 150 - 100 = 50;          pending = B; running = 150
//! end 200        B gets 200 - 150 = 50;          transaction sealed
//! ```
//!
//! An unreadable record inside a transaction breaks this chain of deltas, so
//! the transaction is marked unreadable. An unreadable end marker still
//! closes it.

use crate::types::{ProductScan, ScanEvent, Transaction};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Assign the weight measured since the previous reading to the pending scan
///
/// Returns the delta between `reading` and `running`, or `None` if it does
/// not fit in a decimal, in which case the pending scan is left untouched.
/// When there is no pending scan (the first reading of a transaction) the
/// delta is returned but attributed to nothing.
pub fn settle_pending(
    pending: Option<&mut ProductScan>,
    reading: Decimal,
    running: Decimal,
) -> Option<Decimal> {
    let delta = reading.checked_sub(running)?;
    if let Some(scan) = pending {
        scan.weight = delta;
    }
    Some(delta)
}

/// State of a transaction between its start and end markers
#[derive(Debug, Default)]
struct OpenTransaction {
    transaction: Transaction,
    pending: Option<ProductScan>,
    running_weight: Decimal,
}

impl OpenTransaction {
    fn settle(&mut self, reading: Decimal) {
        if settle_pending(self.pending.as_mut(), reading, self.running_weight).is_none() {
            warn!(%reading, running = %self.running_weight, "Scale delta overflowed");
            self.transaction.unreadable = true;
        }
        self.running_weight = reading;
    }

    fn scan(&mut self, barcode: String, reading: Decimal) {
        self.settle(reading);
        if let Some(settled) = self.pending.replace(ProductScan::pending(barcode)) {
            self.transaction.scans.push(settled);
        }
    }

    fn seal(mut self) -> Transaction {
        if let Some(settled) = self.pending.take() {
            self.transaction.scans.push(settled);
        }
        self.transaction
    }

    fn scan_count(&self) -> usize {
        self.transaction.scans.len() + usize::from(self.pending.is_some())
    }
}

/// Reconstructor states
#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    InTransaction(OpenTransaction),
}

/// Streaming transaction reconstructor
///
/// Feed events in arrival order with [`push`](ScanReconstructor::push); a
/// sealed transaction is returned for every end marker, readable or not,
/// that closes an open transaction.
#[derive(Debug, Default)]
pub struct ScanReconstructor {
    state: State,
}

impl ScanReconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transaction has been started but not yet ended
    pub fn in_transaction(&self) -> bool {
        matches!(self.state, State::InTransaction(_))
    }

    /// Consume one event
    ///
    /// # Returns
    ///
    /// * `Some(Transaction)` - The event was an end marker closing a transaction
    /// * `None` - Otherwise
    pub fn push(&mut self, event: ScanEvent) -> Option<Transaction> {
        match (std::mem::take(&mut self.state), event) {
            (State::Idle, ScanEvent::Start) => {
                self.state = State::InTransaction(OpenTransaction::default());
                None
            }
            (State::InTransaction(open), ScanEvent::Start) => {
                warn!(
                    scans = open.scan_count(),
                    "Transaction restarted before its end marker, discarding it"
                );
                self.state = State::InTransaction(OpenTransaction::default());
                None
            }
            (State::InTransaction(mut open), ScanEvent::Scan { barcode, reading }) => {
                open.scan(barcode, reading);
                self.state = State::InTransaction(open);
                None
            }
            (State::InTransaction(mut open), ScanEvent::End { reading }) => {
                open.settle(reading);
                Some(open.seal())
            }
            (
                State::InTransaction(mut open),
                ScanEvent::Unreadable {
                    closes_transaction, ..
                },
            ) => {
                open.transaction.unreadable = true;
                if closes_transaction {
                    Some(open.seal())
                } else {
                    self.state = State::InTransaction(open);
                    None
                }
            }
            (State::Idle, event) => {
                debug!(?event, "Ignoring event outside of a transaction");
                None
            }
        }
    }

    /// Signal end of input
    ///
    /// An unfinished transaction is dropped.
    pub fn finish(self) {
        if let State::InTransaction(open) = self.state {
            warn!(
                scans = open.scan_count(),
                "Input ended inside a transaction, discarding it"
            );
        }
    }
}

/// Reconstruct every complete transaction in an event sequence
pub fn reconstruct<I>(events: I) -> Vec<Transaction>
where
    I: IntoIterator<Item = ScanEvent>,
{
    let mut reconstructor = ScanReconstructor::new();
    let transactions: Vec<Transaction> = events
        .into_iter()
        .filter_map(|event| reconstructor.push(event))
        .collect();
    reconstructor.finish();
    transactions
}
