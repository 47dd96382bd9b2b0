use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, info};

use crate::order::{Order, OrderChannel, OrderError};

/// Runs one order submission at a time off the UI thread.
///
/// The frame loop calls [`poll`](Submitter::poll) every frame; the result
/// comes back there, so all form state is still only touched by the UI
/// thread. Dropping the submitter drops the receiver and a late result is
/// discarded by the worker.
pub struct Submitter {
    channel: Arc<dyn OrderChannel>,
    pending: Option<(Order, Receiver<Result<(), OrderError>>)>,
}

impl Submitter {
    pub fn new(channel: Arc<dyn OrderChannel>) -> Self {
        Self { channel, pending: None }
    }

    pub fn channel(&self) -> &dyn OrderChannel {
        self.channel.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Sends `order` once, on a worker thread.
    pub fn start(&mut self, order: Order) -> Result<(), OrderError> {
        let (tx, rx) = mpsc::channel();
        let channel = Arc::clone(&self.channel);
        let payload = order.clone();
        thread::Builder::new()
            .name("order-submit".to_string())
            .spawn(move || {
                let result = channel.submit(&payload);
                // Receiver gone means the product screen was torn down
                let _ = tx.send(result);
            })
            .map_err(OrderError::Worker)?;
        info!(quantity = order.quantity, "order submission started");
        self.pending = Some((order, rx));
        Ok(())
    }

    /// The finished submission, if its result has arrived.
    pub fn poll(&mut self) -> Option<(Order, Result<(), OrderError>)> {
        let (_, rx) = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(OrderError::Abandoned),
        };
        let (order, _) = self.pending.take()?;
        debug!(ok = result.is_ok(), "order submission finished");
        Some((order, result))
    }
}
