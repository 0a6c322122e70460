use std::{cell::RefCell, fmt, rc::Rc, time::Duration};

use thiserror::Error;

use crate::scheduler::{Scheduler, TimerSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTiming {
    /// Simulated round trip of a send.
    pub send_delay: Duration,
    /// How long the "sent" confirmation stays up.
    pub reset_delay: Duration,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            send_delay: Duration::from_millis(1800),
            reset_delay: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// First empty field in form order. Like the browser's `required`
    /// check, whitespace counts as a value.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }
}

/// Sending and sent are states of one enum so they can't both hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    pub focused: Option<Field>,
}

impl ContactState {
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn is_sent(&self) -> bool {
        self.status == SubmitStatus::Sent
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("try again in a moment")]
    Busy,
}

struct ControllerInner {
    state: RefCell<ContactState>,
    slot: TimerSlot,
    timing: ContactTiming,
    on_change: Box<dyn Fn(&ContactState)>,
}

impl ControllerInner {
    fn update(&self, f: impl FnOnce(&mut ContactState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        (self.on_change)(&snapshot);
    }
}

/// Contact form with a simulated send.
///
/// Nothing leaves the browser: a submit waits `send_delay`, reports
/// success, clears the fields and drops back to idle after `reset_delay`.
/// Dropping the controller cancels whichever of those timers is pending.
pub struct ContactController {
    inner: Rc<ControllerInner>,
}

impl ContactController {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        timing: ContactTiming,
        on_change: impl Fn(&ContactState) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                state: RefCell::new(ContactState::default()),
                slot: TimerSlot::new(scheduler),
                timing,
                on_change: Box::new(on_change),
            }),
        }
    }

    pub fn state(&self) -> ContactState {
        self.inner.state.borrow().clone()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.inner.update(|s| s.form.set(field, value));
    }

    pub fn set_focus(&self, field: Option<Field>) {
        self.inner.update(|s| s.focused = field);
    }

    pub fn submit(&self) -> Result<(), ContactError> {
        {
            let state = self.inner.state.borrow();
            if state.is_sending() || state.is_sent() {
                return Err(ContactError::Busy);
            }
            if let Some(field) = state.form.missing_field() {
                return Err(ContactError::MissingField(field));
            }
        }
        log::debug!("simulating contact form send");
        self.inner.update(|s| s.status = SubmitStatus::Sending);

        let weak = Rc::downgrade(&self.inner);
        let send_delay = self.inner.timing.send_delay;
        self.inner.slot.arm(send_delay, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.update(|s| {
                s.status = SubmitStatus::Sent;
                s.form = ContactForm::default();
            });

            let weak = Rc::downgrade(&inner);
            inner.slot.arm(inner.timing.reset_delay, move || {
                if let Some(inner) = weak.upgrade() {
                    inner.update(|s| s.status = SubmitStatus::Idle);
                }
            });
        });
        Ok(())
    }
}
