//! Per-message diagnostics
//!
//! The converter reports what it sees to a [`ConversionObserver`] handed
//! in by the caller, so diagnostics can be logged, captured or dropped.

use tracing::{debug, info, warn, Level};

use crate::config::TraceCategories;
use crate::lafite::{FlagAnomaly, Stamp};

/// Receives conversion events. Every method defaults to doing nothing.
///
/// `index` is the zero-based position of the message in its file.
pub trait ConversionObserver {
    fn message_started(&mut self, _index: u64, _stamp: &Stamp) {}

    /// A stamp flag fell outside its documented alphabet. Never fatal.
    fn flag_anomaly(&mut self, _index: u64, _anomaly: FlagAnomaly) {}

    fn header_line(&mut self, _index: u64, _line: &[u8]) {}

    fn format_detected(&mut self, _index: u64, _format: &str) {}

    fn body_line(&mut self, _index: u64, _line: &[u8]) {}

    /// A deleted message was dropped without output
    fn message_skipped(&mut self, _index: u64, _stamp: &Stamp) {}

    fn message_finished(&mut self, _index: u64, _bytes_consumed: usize) {}
}

/// Observer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ConversionObserver for NullObserver {}

/// Observer that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    trace: TraceCategories,
}

impl TracingObserver {
    pub fn new(trace: TraceCategories) -> Self {
        Self { trace }
    }

    /// Level a flag anomaly is logged at. Undocumented trailing flags only
    /// reach `WARN` when their trace category is on.
    pub fn anomaly_level(&self, anomaly: FlagAnomaly) -> Level {
        match anomaly {
            FlagAnomaly::Undocumented(_) if !self.trace.undocumented_flags => Level::DEBUG,
            _ => Level::WARN,
        }
    }
}

impl ConversionObserver for TracingObserver {
    fn message_started(&mut self, index: u64, stamp: &Stamp) {
        debug!("Message {}: stamp '{}'", index, stamp);
    }

    fn flag_anomaly(&mut self, index: u64, anomaly: FlagAnomaly) {
        if self.anomaly_level(anomaly) == Level::WARN {
            warn!("Message {}: {}", index, anomaly);
        } else {
            debug!("Message {}: {}", index, anomaly);
        }
    }

    fn header_line(&mut self, _index: u64, line: &[u8]) {
        if self.trace.headers {
            info!("Header> '{}'", String::from_utf8_lossy(line));
        }
    }

    fn format_detected(&mut self, _index: u64, format: &str) {
        if self.trace.headers {
            info!("Format is {}", format);
        }
    }

    fn body_line(&mut self, _index: u64, line: &[u8]) {
        if self.trace.body {
            info!("> '{}'", String::from_utf8_lossy(line));
        }
    }

    fn message_skipped(&mut self, index: u64, stamp: &Stamp) {
        info!("Skipping deleted message {} ({} bytes)", index, stamp.message_length);
    }
}

impl<O: ConversionObserver + ?Sized> ConversionObserver for &mut O {
    fn message_started(&mut self, index: u64, stamp: &Stamp) {
        (**self).message_started(index, stamp)
    }

    fn flag_anomaly(&mut self, index: u64, anomaly: FlagAnomaly) {
        (**self).flag_anomaly(index, anomaly)
    }

    fn header_line(&mut self, index: u64, line: &[u8]) {
        (**self).header_line(index, line)
    }

    fn format_detected(&mut self, index: u64, format: &str) {
        (**self).format_detected(index, format)
    }

    fn body_line(&mut self, index: u64, line: &[u8]) {
        (**self).body_line(index, line)
    }

    fn message_skipped(&mut self, index: u64, stamp: &Stamp) {
        (**self).message_skipped(index, stamp)
    }

    fn message_finished(&mut self, index: u64, bytes_consumed: usize) {
        (**self).message_finished(index, bytes_consumed)
    }
}
