//! # User-Facing Notices
//!
//! Every failed cart operation emits exactly one [`CartNotice`]; successes and
//! silently ignored requests emit none. Delivery is fire-and-forget: the cart
//! never waits on, or fails because of, the notification channel.

use std::fmt::Display;
use tokio::sync::mpsc;
use tracing::warn;

/// The conditions reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartNotice {
    InsufficientStockOnAdd,
    InsufficientStockOnUpdate,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl CartNotice {
    /// One-line message suitable for a toast.
    pub fn message(&self) -> &'static str {
        match self {
            CartNotice::InsufficientStockOnAdd | CartNotice::InsufficientStockOnUpdate => {
                "Requested quantity is out of stock"
            }
            CartNotice::AddFailed => "Could not add product to cart",
            CartNotice::RemoveFailed => "Could not remove product from cart",
            CartNotice::UpdateFailed => "Could not change product quantity",
        }
    }
}

impl Display for CartNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Sink for [`CartNotice`]s.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: CartNotice);
}

/// Forwards notices to a channel the UI layer drains.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<CartNotice>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<CartNotice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: CartNotice) {
        // Nobody listening is not the cart's problem
        let _ = self.sender.send(notice);
    }
}

/// Writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: CartNotice) {
        warn!(?notice, "{notice}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        notifier.notify(CartNotice::AddFailed);
        notifier.notify(CartNotice::InsufficientStockOnUpdate);

        assert_eq!(receiver.try_recv().unwrap(), CartNotice::AddFailed);
        assert_eq!(receiver.try_recv().unwrap(), CartNotice::InsufficientStockOnUpdate);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_channel_notifier_without_listener() {
        let (notifier, receiver) = ChannelNotifier::new();
        drop(receiver);
        notifier.notify(CartNotice::RemoveFailed);
    }

    #[test]
    fn test_stock_notices_share_a_message() {
        assert_eq!(
            CartNotice::InsufficientStockOnAdd.to_string(),
            CartNotice::InsufficientStockOnUpdate.to_string()
        );
        assert_ne!(CartNotice::AddFailed.message(), CartNotice::RemoveFailed.message());
    }
}
