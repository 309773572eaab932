//! Per-byte pricing.

/// Something that can be priced.
///
/// Derive it with `#[derive(Cost)]` on message structs; implement it by hand
/// for closed sets of messages so every variant is matched.
pub trait Cost {
    /// Price of sending this value. Never negative.
    fn cost(&self) -> f64;
}

/// A pair of per-byte prices: one for regular senders, one for subscribers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rate {
    standard: f64,
    subscribed: f64,
}

impl Rate {
    /// Constructs a rate pair. Both prices are expected to be non-negative;
    /// `#[derive(Cost)]` rejects negative literals at compile time.
    #[must_use]
    pub const fn new(standard: f64, subscribed: f64) -> Self {
        Self {
            standard,
            subscribed,
        }
    }

    /// Per-byte price for unsubscribed senders.
    #[must_use]
    pub const fn standard(&self) -> f64 {
        self.standard
    }

    /// Per-byte price for subscribers.
    #[must_use]
    pub const fn subscribed(&self) -> f64 {
        self.subscribed
    }

    /// The price that applies to a sender.
    #[must_use]
    pub const fn per_byte(&self, is_subscribed: bool) -> f64 {
        if is_subscribed {
            self.subscribed
        } else {
            self.standard
        }
    }

    /// Prices `len` bytes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // message bodies stay far below 2^52 bytes
    pub fn charge(&self, len: usize, is_subscribed: bool) -> f64 {
        len as f64 * self.per_byte(is_subscribed)
    }
}
