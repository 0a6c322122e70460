/// Marks a non-link, non-button element as hoverable for the cursor.
pub const HOVER_ATTRIBUTE: &str = "data-cursor-hover";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub is_hovering: bool,
    pub is_visible: bool,
}

/// Pointer events as seen by a single listener at the document root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    /// The pointer moved onto a new element; `interactive` is the result of
    /// [`is_interactive`] for that element.
    Over { interactive: bool },
    EnterDocument,
    LeaveDocument,
}

#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    state: CursorState,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Applies an event and reports whether the state changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let before = self.state;
        match event {
            PointerEvent::Move { x, y } => {
                self.state.x = x;
                self.state.y = y;
                self.state.is_visible = true;
            }
            PointerEvent::Over { interactive } => self.state.is_hovering = interactive,
            PointerEvent::EnterDocument => self.state.is_visible = true,
            PointerEvent::LeaveDocument => {
                self.state.is_visible = false;
                self.state.is_hovering = false;
            }
        }
        self.state != before
    }
}

/// Just enough of a DOM element to decide whether it is interactive.
pub trait ElementProbe: Sized {
    fn tag_name(&self) -> String;
    fn has_attribute(&self, name: &str) -> bool;
    fn parent_element(&self) -> Option<Self>;
}

/// True if the element or any ancestor is an `a`, a `button`, or carries
/// [`HOVER_ATTRIBUTE`].
pub fn is_interactive<E: ElementProbe>(element: &E) -> bool {
    let matches = |el: &E| {
        let tag = el.tag_name();
        tag.eq_ignore_ascii_case("a")
            || tag.eq_ignore_ascii_case("button")
            || el.has_attribute(HOVER_ATTRIBUTE)
    };
    if matches(element) {
        return true;
    }
    let mut next = element.parent_element();
    while let Some(el) = next {
        if matches(&el) {
            return true;
        }
        next = el.parent_element();
    }
    false
}

#[cfg(feature = "hydrate")]
impl ElementProbe for web_sys::Element {
    fn tag_name(&self) -> String {
        web_sys::Element::tag_name(self)
    }

    fn has_attribute(&self, name: &str) -> bool {
        web_sys::Element::has_attribute(self, name)
    }

    fn parent_element(&self) -> Option<Self> {
        web_sys::Node::parent_element(self)
    }
}
