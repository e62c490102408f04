// Global logging ring for netprint

use spin::Mutex;

const CAPACITY: usize = 512;

/// Fixed ring of static messages; the oldest entry is overwritten when full.
struct LogRing {
    slots: [&'static str; CAPACITY],
    written: usize,
}

impl LogRing {
    const fn new() -> Self {
        Self {
            slots: [""; CAPACITY],
            written: 0,
        }
    }

    fn push(&mut self, message: &'static str) {
        self.slots[self.written % CAPACITY] = message;
        self.written += 1;
    }

    /// Slot index of the `i`th of the newest `n` entries, oldest first.
    fn slot_of(&self, n: usize, i: usize) -> usize {
        (self.written - n + i) % CAPACITY
    }
}

static RING: Mutex<LogRing> = Mutex::new(LogRing::new());

pub fn log(message: &'static str) {
    RING.lock().push(message);
}

/// Messages logged since boot, including ones already overwritten.
pub fn total_log_count() -> usize {
    RING.lock().written
}

/// Visit up to `n` of the newest retained messages, oldest first.
///
/// The ring stays locked for the duration; `f` must not log.
pub fn for_each_recent<F: FnMut(&'static str)>(n: usize, mut f: F) {
    let ring = RING.lock();
    let n = n.min(ring.written).min(CAPACITY);
    for i in 0..n {
        f(ring.slots[ring.slot_of(n, i)]);
    }
}

#[macro_export]
macro_rules! log_info {
    ($msg:expr) => {
        $crate::logger::log($msg)
    };
}
