use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::scheduler::{Scheduler, TimerSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval: Duration,
    pub hold: Duration,
    pub delete_interval: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(80),
            hold: Duration::from_millis(2000),
            delete_interval: Duration::from_millis(45),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
    Advancing,
}

/// Character-by-character type/hold/delete cycle over a list of phrases.
///
/// Pure state: nothing here knows about time. Callers ask for
/// [`next_delay`](Self::next_delay) and call [`advance`](Self::advance) once
/// it has elapsed.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    index: usize,
    // counted in chars, not bytes
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Self {
        Self {
            phrases,
            timing,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    fn current(&self) -> &str {
        self.phrases.get(self.index).map(String::as_str).unwrap_or("")
    }

    pub fn displayed(&self) -> &str {
        let phrase = self.current();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn phase(&self) -> Phase {
        let len = self.current().chars().count();
        match (self.deleting, self.shown) {
            (false, n) if n < len => Phase::Typing,
            (false, _) => Phase::Holding,
            (true, 0) => Phase::Advancing,
            (true, _) => Phase::Deleting,
        }
    }

    /// How long to wait before the next [`advance`](Self::advance).
    /// `None` when there is nothing to animate.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.phrases.is_empty() {
            return None;
        }
        Some(match self.phase() {
            Phase::Typing => self.timing.type_interval,
            Phase::Holding => self.timing.hold,
            Phase::Deleting => self.timing.delete_interval,
            Phase::Advancing => Duration::ZERO,
        })
    }

    /// Applies one transition and returns the phase it left.
    pub fn advance(&mut self) -> Phase {
        let phase = self.phase();
        if self.phrases.is_empty() {
            return phase;
        }
        match phase {
            Phase::Typing => self.shown += 1,
            Phase::Holding => self.deleting = true,
            Phase::Deleting => self.shown -= 1,
            Phase::Advancing => {
                self.deleting = false;
                self.index = (self.index + 1) % self.phrases.len();
            }
        }
        phase
    }
}

struct DriverInner {
    machine: RefCell<Typewriter>,
    slot: TimerSlot,
    on_change: Box<dyn Fn(&str)>,
}

/// Runs a [`Typewriter`] on a [`Scheduler`], reporting every change of the
/// displayed text. Dropping the driver cancels its timer.
pub struct TypewriterDriver {
    inner: Rc<DriverInner>,
}

impl TypewriterDriver {
    pub fn start(
        machine: Typewriter,
        scheduler: Rc<dyn Scheduler>,
        on_change: impl Fn(&str) + 'static,
    ) -> Self {
        let inner = Rc::new(DriverInner {
            machine: RefCell::new(machine),
            slot: TimerSlot::new(scheduler),
            on_change: Box::new(on_change),
        });
        arm(&inner);
        Self { inner }
    }

    pub fn displayed(&self) -> String {
        self.inner.machine.borrow().displayed().to_string()
    }

    pub fn phrase_index(&self) -> usize {
        self.inner.machine.borrow().phrase_index()
    }
}

fn arm(inner: &Rc<DriverInner>) {
    let delay = {
        let mut machine = inner.machine.borrow_mut();
        // advancing to the next phrase needs no timer of its own
        while machine.next_delay() == Some(Duration::ZERO) {
            machine.advance();
        }
        machine.next_delay()
    };
    let Some(delay) = delay else {
        return;
    };
    let weak = Rc::downgrade(inner);
    inner.slot.arm(delay, move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let (phase, text) = {
            let mut machine = inner.machine.borrow_mut();
            let phase = machine.advance();
            (phase, machine.displayed().to_string())
        };
        if phase != Phase::Holding {
            (inner.on_change)(&text);
        }
        arm(&inner);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    fn phrases(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_machine_cycles_through_phrases() {
        let mut tw = Typewriter::new(phrases(&["A", "BB"]), TypewriterTiming::default());
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.phase(), Phase::Typing);

        let mut seen = Vec::new();
        for _ in 0..11 {
            tw.advance();
            seen.push((tw.phrase_index(), tw.displayed().to_string(), tw.phase()));
        }
        assert_eq!(
            seen,
            vec![
                (0, "A".to_string(), Phase::Holding),
                (0, "A".to_string(), Phase::Deleting),
                (0, "".to_string(), Phase::Advancing),
                (1, "".to_string(), Phase::Typing),
                (1, "B".to_string(), Phase::Typing),
                (1, "BB".to_string(), Phase::Holding),
                (1, "BB".to_string(), Phase::Deleting),
                (1, "B".to_string(), Phase::Deleting),
                (1, "".to_string(), Phase::Advancing),
                (0, "".to_string(), Phase::Typing),
                (0, "A".to_string(), Phase::Holding),
            ]
        );
    }

    #[test]
    fn test_delays_follow_phase() {
        let timing = TypewriterTiming::default();
        let mut tw = Typewriter::new(phrases(&["ab"]), timing);
        assert_eq!(tw.next_delay(), Some(timing.type_interval));
        tw.advance();
        tw.advance();
        assert_eq!(tw.next_delay(), Some(timing.hold));
        tw.advance();
        assert!(tw.is_deleting());
        assert_eq!(tw.next_delay(), Some(timing.delete_interval));
        tw.advance();
        tw.advance();
        assert_eq!(tw.next_delay(), Some(Duration::ZERO));
    }

    #[test]
    fn test_multibyte_phrases_are_typed_by_char() {
        let mut tw = Typewriter::new(phrases(&["né✓"]), TypewriterTiming::default());
        tw.advance();
        assert_eq!(tw.displayed(), "n");
        tw.advance();
        assert_eq!(tw.displayed(), "né");
        tw.advance();
        assert_eq!(tw.displayed(), "né✓");
        assert_eq!(tw.phase(), Phase::Holding);
    }

    #[test]
    fn test_single_phrase_wraps_to_itself() {
        let mut tw = Typewriter::new(phrases(&["x"]), TypewriterTiming::default());
        // type, hold, delete, advance
        for _ in 0..4 {
            tw.advance();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut tw = Typewriter::new(Vec::new(), TypewriterTiming::default());
        assert_eq!(tw.next_delay(), None);
        tw.advance();
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_driver_timeline() {
        let scheduler = Rc::new(ManualScheduler::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let driver = TypewriterDriver::start(
            Typewriter::new(phrases(&["A", "BB"]), TypewriterTiming::default()),
            scheduler.clone(),
            move |s| sink.borrow_mut().push(s.to_string()),
        );

        let mut timeline = Vec::new();
        while scheduler.now() < Duration::from_millis(4455) {
            let before = log.borrow().len();
            assert!(scheduler.fire_next());
            if log.borrow().len() > before {
                let text = log.borrow().last().cloned().unwrap_or_default();
                timeline.push((scheduler.now().as_millis(), text));
            }
            assert_eq!(scheduler.pending(), 1);
        }

        let expected: Vec<(u128, String)> = vec![
            (80, "A"),
            (2125, ""),
            (2205, "B"),
            (2285, "BB"),
            (4330, "B"),
            (4375, ""),
            (4455, "A"),
        ]
        .into_iter()
        .map(|(t, s)| (t, s.to_string()))
        .collect();
        assert_eq!(timeline, expected);
        assert_eq!(driver.phrase_index(), 0);
        assert_eq!(driver.displayed(), "A");
    }

    #[test]
    fn test_dropped_driver_leaves_no_timer() {
        let scheduler = Rc::new(ManualScheduler::new());
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let driver = TypewriterDriver::start(
            Typewriter::new(phrases(&["hello"]), TypewriterTiming::default()),
            scheduler.clone(),
            move |_| *sink.borrow_mut() += 1,
        );
        scheduler.advance(Duration::from_millis(160));
        assert_eq!(*calls.borrow(), 2);
        assert_eq!(driver.displayed(), "he");

        drop(driver);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(*calls.borrow(), 2);
    }
}
