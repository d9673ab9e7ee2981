//! Command dispatcher: the cosmetic "transmit" action behind every remote
//! button
//!
//! Each press produces one log record with a random fixed-width hex token.
//! The token carries no meaning; it exists purely for the protocol-log
//! display. The only button with a real side effect is power, and that goes
//! through the device store, not through here.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Local};
use rand::Rng;

/// Rolling log capacity; oldest entries are dropped
pub const TRANSMIT_LOG_CAP: usize = 5;

/// How long the "transmitting" indicator stays lit after a press
pub const TRANSMIT_CLEAR: Duration = Duration::from_millis(250);

/// One cosmetic log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmitRecord {
    pub at: DateTime<Local>,
    pub command: String,
    /// Random `0xXXXXXXXX` token; does not encode the command
    pub code: String,
}

/// Bounded most-recent-first transmit log plus the transient indicator.
///
/// The indicator is sequence-guarded: each press bumps the sequence, and a
/// clear only lands if it carries the latest sequence, so a timer scheduled
/// for an earlier press cannot blank the indicator of a later one.
#[derive(Debug, Default)]
pub struct TransmitLog {
    records: VecDeque<TransmitRecord>,
    seq: u64,
    active: Option<u64>,
}

impl TransmitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button press. Returns the sequence number the clear timer
    /// must echo back. Never fails.
    pub fn record(&mut self, command: impl Into<String>) -> u64 {
        let record = TransmitRecord {
            at: Local::now(),
            command: command.into(),
            code: simulated_code(),
        };
        tracing::debug!(command = %record.command, code = %record.code, "transmit");

        self.records.push_front(record);
        self.records.truncate(TRANSMIT_LOG_CAP);

        self.seq += 1;
        self.active = Some(self.seq);
        self.seq
    }

    /// Clear the indicator for `seq`; stale sequences are ignored.
    pub fn clear_indicator(&mut self, seq: u64) {
        if self.active == Some(seq) {
            self.active = None;
        }
    }

    pub fn is_transmitting(&self) -> bool {
        self.active.is_some()
    }

    /// Records, most recent first.
    pub fn records(&self) -> &VecDeque<TransmitRecord> {
        &self.records
    }
}

/// Random fixed-width hexadecimal token for the protocol-log display
fn simulated_code() -> String {
    format!("0x{:08X}", rand::thread_rng().gen::<u32>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_capped_and_most_recent_first() {
        let mut log = TransmitLog::new();
        for i in 0..8 {
            log.record(format!("CMD_{i}"));
        }
        assert_eq!(log.records().len(), TRANSMIT_LOG_CAP);
        assert_eq!(log.records()[0].command, "CMD_7");
        assert_eq!(log.records()[4].command, "CMD_3");
    }

    #[test]
    fn test_code_is_fixed_width_hex() {
        let mut log = TransmitLog::new();
        log.record("POWER");
        let code = &log.records()[0].code;
        assert_eq!(code.len(), 10);
        assert!(code.starts_with("0x"));
        assert!(code[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_indicator_clears_only_for_latest_seq() {
        let mut log = TransmitLog::new();
        let first = log.record("VOL_UP");
        let second = log.record("VOL_UP");
        assert!(log.is_transmitting());

        // The clear scheduled for the first press arrives late; ignored.
        log.clear_indicator(first);
        assert!(log.is_transmitting());

        log.clear_indicator(second);
        assert!(!log.is_transmitting());
    }
}
