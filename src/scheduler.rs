use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
    time::Duration,
};

#[cfg(feature = "hydrate")]
use std::collections::HashMap;

#[cfg(feature = "hydrate")]
use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

pub type Task = Box<dyn FnOnce()>;

// Cancelling an id that already fired is a no-op.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;
    fn cancel(&self, id: TimerId);
}

/// At most one outstanding timer, cancelled on re-arm and on drop.
pub struct TimerSlot {
    scheduler: Rc<dyn Scheduler>,
    pending: Cell<Option<TimerId>>,
}

impl TimerSlot {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            pending: Cell::new(None),
        }
    }

    pub fn arm(&self, delay: Duration, task: impl FnOnce() + 'static) {
        self.cancel();
        let id = self.scheduler.schedule(delay, Box::new(task));
        self.pending.set(Some(id));
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Virtual clock scheduler. Time only moves when `advance` is called.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    queue: RefCell<BTreeMap<(Duration, u64), Task>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue
            .borrow()
            .keys()
            .next()
            .map(|(at, _)| at.saturating_sub(self.now.get()))
    }

    /// Runs every task due within `by`, in deadline order, including tasks
    /// scheduled by those tasks.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            // the borrow must be released before running the task
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = matches!(queue.first_key_value(), Some((&(at, _), _)) if at <= target);
                if due {
                    queue.pop_first()
                } else {
                    None
                }
            };
            let Some(((at, _), task)) = next else {
                break;
            };
            self.now.set(at);
            task();
        }
        self.now.set(target);
    }

    pub fn fire_next(&self) -> bool {
        match self.next_due() {
            Some(wait) => {
                self.advance(wait);
                true
            }
            None => false,
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue
            .borrow_mut()
            .insert((self.now.get() + delay, id), task);
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        self.queue.borrow_mut().retain(|&(_, seq), _| seq != id.0);
    }
}

/// `setTimeout`-backed scheduler for the browser.
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    handles: Rc<RefCell<HashMap<TimerId, TimeoutHandle>>>,
}

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let handles = Rc::clone(&self.handles);
        let res = set_timeout_with_handle(
            move || {
                handles.borrow_mut().remove(&id);
                task();
            },
            delay,
        );
        match res {
            Ok(handle) => {
                self.handles.borrow_mut().insert(id, handle);
            }
            Err(e) => log::warn!("couldn't schedule timer: {e:?}"),
        }
        id
    }

    fn cancel(&self, id: TimerId) {
        if let Some(handle) = self.handles.borrow_mut().remove(&id) {
            handle.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = Rc::clone(&log);
            move |name: &'static str| -> Task {
                let log = Rc::clone(&log);
                Box::new(move || log.borrow_mut().push(name))
            }
        };
        (log, make)
    }

    #[test]
    fn test_tasks_run_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(Duration::from_millis(300), task("late"));
        scheduler.schedule(Duration::from_millis(100), task("early"));
        scheduler.schedule(Duration::from_millis(100), task("early-2"));

        scheduler.advance(Duration::from_millis(99));
        assert!(log.borrow().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec!["early", "early-2"]);

        scheduler.advance(Duration::from_millis(500));
        assert_eq!(*log.borrow(), vec!["early", "early-2", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(600));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancelled_task_never_runs() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        let id = scheduler.schedule(Duration::from_millis(10), task("cancelled"));
        scheduler.schedule(Duration::from_millis(20), task("kept"));
        scheduler.cancel(id);
        // cancelling twice is harmless
        scheduler.cancel(id);

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(*log.borrow(), vec!["kept"]);
    }

    #[test]
    fn test_tasks_scheduled_while_advancing_run_if_due() {
        let scheduler = Rc::new(ManualScheduler::new());
        let hits = Rc::new(Cell::new(0));

        let inner_scheduler = Rc::clone(&scheduler);
        let inner_hits = Rc::clone(&hits);
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner_hits.set(inner_hits.get() + 1);
                let hits = Rc::clone(&inner_hits);
                inner_scheduler.schedule(
                    Duration::from_millis(10),
                    Box::new(move || hits.set(hits.get() + 1)),
                );
            }),
        );

        scheduler.advance(Duration::from_millis(15));
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.next_due(), Some(Duration::from_millis(5)));

        scheduler.advance(Duration::from_millis(5));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_timer_slot_keeps_one_timer() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (log, _) = recorder();
        let slot = TimerSlot::new(scheduler.clone());

        let first = Rc::clone(&log);
        slot.arm(Duration::from_millis(50), move || first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        slot.arm(Duration::from_millis(80), move || second.borrow_mut().push("second"));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn test_dropping_slot_cancels_pending_timer() {
        let scheduler = Rc::new(ManualScheduler::new());
        let fired = Rc::new(Cell::new(false));

        {
            let slot = TimerSlot::new(scheduler.clone());
            let fired = Rc::clone(&fired);
            slot.arm(Duration::from_millis(5), move || fired.set(true));
            assert_eq!(scheduler.pending(), 1);
        }

        assert_eq!(scheduler.pending(), 0);
        assert!(!scheduler.fire_next());
        assert!(!fired.get());
    }
}
