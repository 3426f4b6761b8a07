//! Rolling 24-hour windowed counters
//!
//! Time-bucketed ring buffer: 24 hourly slots keyed by absolute hour
//! index. Writes land in the slot for the current hour, resetting it
//! first if it still holds data from a lap ago. Reads sum only the
//! slots inside the trailing 24 hours. Bounded memory, O(1) amortized
//! update, O(24) read.

use rust_decimal::Decimal;

const SLOTS: usize = 24;
const HOUR_MS: i64 = 3_600_000;

/// One hourly bucket of windowed contributions.
#[derive(Debug, Clone, Copy)]
struct Slot {
    /// Absolute hour index (Unix millis / hour), -1 when empty.
    hour: i64,
    views: u64,
    income: Decimal,
}

impl Slot {
    fn empty() -> Self {
        Self {
            hour: -1,
            views: 0,
            income: Decimal::ZERO,
        }
    }
}

/// Summed windowed contributions at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowTotals {
    pub views: u64,
    pub income: Decimal,
}

/// Per-book trailing-24h counter state.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    slots: [Slot; SLOTS],
}

impl RollingWindow {
    pub fn new() -> Self {
        Self {
            slots: [Slot::empty(); SLOTS],
        }
    }

    /// Record one windowed view at `now_ms`.
    pub fn record_view(&mut self, now_ms: i64) {
        self.slot_for(now_ms).views += 1;
    }

    /// Record a windowed income contribution at `now_ms`.
    pub fn record_income(&mut self, now_ms: i64, amount: Decimal) {
        self.slot_for(now_ms).income += amount;
    }

    /// Sum contributions within the trailing 24 hours of `now_ms`.
    ///
    /// Bucket granularity is hourly: a contribution expires when its
    /// whole hour falls out of the window.
    pub fn totals(&self, now_ms: i64) -> WindowTotals {
        let now_hour = now_ms.div_euclid(HOUR_MS);
        let mut totals = WindowTotals {
            views: 0,
            income: Decimal::ZERO,
        };
        for slot in &self.slots {
            if slot.hour >= 0 && slot.hour <= now_hour && now_hour - slot.hour < SLOTS as i64 {
                totals.views += slot.views;
                totals.income += slot.income;
            }
        }
        totals
    }

    /// Slot for the hour containing `now_ms`, evicting lapped data.
    fn slot_for(&mut self, now_ms: i64) -> &mut Slot {
        let hour = now_ms.div_euclid(HOUR_MS);
        let idx = hour.rem_euclid(SLOTS as i64) as usize;
        let slot = &mut self.slots[idx];
        if slot.hour != hour {
            *slot = Slot {
                hour,
                views: 0,
                income: Decimal::ZERO,
            };
        }
        slot
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new()
    }
}
