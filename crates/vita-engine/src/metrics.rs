//! Cumulative counters kept by the simulation controller.
//!
//! [`ControllerMetrics`] is updated under the world lock and copied out
//! by [`Controller::metrics`](crate::Controller::metrics).

/// Lifetime counters for one controller.
///
/// Durations are in microseconds. Counters are never reset, not even
/// by [`Controller::reset`](crate::Controller::reset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControllerMetrics {
    /// Steps taken by the continuous loop.
    pub ticks: u64,
    /// Steps taken through `single_step`.
    pub single_steps: u64,
    /// Transitions from stopped to running.
    pub starts: u64,
    /// Transitions from running to stopped caused by `stop` or `reset`.
    pub stops: u64,
    /// Transitions from running to stopped caused by the generation limit.
    pub auto_stops: u64,
    /// Completed resets.
    pub resets: u64,
    /// Ticks whose step took longer than the tick interval.
    pub overruns: u64,
    /// Wall-clock time of the most recent step, in microseconds.
    pub last_step_us: u64,
}

impl ControllerMetrics {
    /// Steps taken by any means.
    pub fn total_steps(&self) -> u64 {
        self.ticks + self.single_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = ControllerMetrics::default();
        assert_eq!(m.ticks, 0);
        assert_eq!(m.single_steps, 0);
        assert_eq!(m.starts, 0);
        assert_eq!(m.stops, 0);
        assert_eq!(m.auto_stops, 0);
        assert_eq!(m.resets, 0);
        assert_eq!(m.overruns, 0);
        assert_eq!(m.last_step_us, 0);
    }

    #[test]
    fn total_steps_sums_both_sources() {
        let m = ControllerMetrics {
            ticks: 5,
            single_steps: 3,
            ..Default::default()
        };
        assert_eq!(m.total_steps(), 8);
    }
}
