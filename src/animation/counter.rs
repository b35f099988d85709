use crate::{animation::ease::Ease, foundation::core::TimeMs};

/// One reading of the progress counter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CounterSample {
    /// Offset from the counter origin.
    pub at_ms: u64,
    /// Elapsed fraction of the counter duration, in `[0, 1]`.
    pub fraction: f64,
    /// Eased value in `[0, target]`.
    pub value: f64,
}

/// Eased 0 → target count, sampled on its own fixed interval.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct CounterStream {
    samples: Vec<CounterSample>,
    interval_ms: u64,
    target: f64,
}

impl CounterStream {
    /// Sample `ease` every `interval_ms` across `duration_ms` (at least 1 ms).
    ///
    /// The first sample is at offset 0 and the last one, at or after `duration_ms`, holds
    /// exactly `target`. Values never decrease.
    pub fn build(target: f64, duration_ms: u64, interval_ms: u64, ease: Ease) -> Self {
        let duration = duration_ms.max(1);
        let interval = interval_ms.max(1);
        let mut samples = Vec::new();
        let mut k = 0u64;
        loop {
            let at_ms = k.saturating_mul(interval);
            let fraction = (at_ms as f64 / duration as f64).min(1.0);
            let value = if fraction >= 1.0 {
                target
            } else {
                (target * ease.apply(fraction)).clamp(0.0, target)
            };
            samples.push(CounterSample {
                at_ms,
                fraction,
                value,
            });
            if fraction >= 1.0 {
                break;
            }
            k += 1;
        }
        Self {
            samples,
            interval_ms: interval,
            target,
        }
    }

    /// All samples in order.
    pub fn samples(&self) -> &[CounterSample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// `true` for a stream with no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sampling interval.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Final value.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Due time of sample `index`, relative to `origin`.
    pub fn due(&self, origin: TimeMs, index: usize) -> Option<TimeMs> {
        self.samples
            .get(index)
            .map(|s| TimeMs(origin.0.saturating_add(s.at_ms)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/counter.rs"]
mod tests;
