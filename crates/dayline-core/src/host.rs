//! Host seams: the two capabilities the embedding host supplies.
//!
//! The widget owns no I/O. Whoever mounts it hands over a container to
//! write markup into and a clock to read the time from; everything
//! else stays on the host's side of the line.

use chrono::Timelike;

use crate::time::TimeOfDay;

/// A container the widget renders into.
///
/// The host owns the element; the widget only ever replaces its
/// content wholesale, so implementations never need to diff.
pub trait Surface: Send {
    fn replace_content(&mut self, html: &str);
}

/// Wall-clock source, minute granularity.
pub trait Clock: Send {
    fn now(&self) -> TimeOfDay;
}

/// The system wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        let now = chrono::Local::now().time();
        TimeOfDay::from_hm(now.hour(), now.minute()).unwrap_or(TimeOfDay::MIDNIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_returns_a_valid_time() {
        // Just bounds; the exact value depends on when the test runs.
        let now = SystemClock.now();
        assert!(now.minutes() < crate::time::MINUTES_PER_DAY);
    }

    #[test]
    fn clock_trait_is_object_safe() {
        struct Fixed;
        impl Clock for Fixed {
            fn now(&self) -> TimeOfDay {
                TimeOfDay::hm(8, 30)
            }
        }
        let clock: Box<dyn Clock> = Box::new(Fixed);
        assert_eq!(clock.now(), TimeOfDay::hm(8, 30));
    }
}
