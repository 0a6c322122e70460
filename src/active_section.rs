pub const ACTIVE_OFFSET: f64 = 100.0;

pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

// Sections are scanned last to first, so registration order has to match
// document order.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    sections: Vec<String>,
    offset: f64,
    current: Option<usize>,
}

impl ActiveSectionTracker {
    pub fn new(offset: f64) -> Self {
        Self {
            sections: Vec::new(),
            offset,
            current: None,
        }
    }

    pub fn with_sections<I, S>(offset: f64, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tracker = Self::new(offset);
        for id in ids {
            tracker.register(id);
        }
        tracker
    }

    pub fn register(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.sections.contains(&id) {
            self.sections.push(id);
        }
    }

    pub fn unregister(&mut self, id: &str) {
        let current = self.current().map(str::to_owned);
        self.sections.retain(|s| s != id);
        self.current = current.and_then(|c| self.sections.iter().position(|s| *s == c));
    }

    pub fn current(&self) -> Option<&str> {
        self.current.map(|i| self.sections[i].as_str())
    }

    /// `top_of` returns a section's top edge relative to the viewport, or
    /// `None` if its element is missing. When no section qualifies the
    /// previous one stays active.
    pub fn recompute<F>(&mut self, top_of: F) -> Option<&str>
    where
        F: Fn(&str) -> Option<f64>,
    {
        let found = self
            .sections
            .iter()
            .enumerate()
            .rev()
            .find(|(_, id)| top_of(id).is_some_and(|top| top <= self.offset))
            .map(|(i, _)| i);
        if found.is_some() {
            self.current = found;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 4] = ["about", "skills", "projects", "contact"];

    // lays the sections out 1000px apart starting at y=800 and returns their
    // viewport-relative tops at the given scroll position
    fn layout(scroll_y: f64) -> impl Fn(&str) -> Option<f64> {
        move |id| {
            let i = IDS.iter().position(|s| *s == id)?;
            Some(800.0 + 1000.0 * i as f64 - scroll_y)
        }
    }

    #[test]
    fn test_unset_above_first_section() {
        let mut tracker = ActiveSectionTracker::with_sections(ACTIVE_OFFSET, IDS);
        assert_eq!(tracker.recompute(layout(0.0)), None);
        assert_eq!(tracker.recompute(layout(699.0)), None);
    }

    #[test]
    fn test_offset_line_is_inclusive() {
        let mut tracker = ActiveSectionTracker::with_sections(ACTIVE_OFFSET, IDS);
        assert_eq!(tracker.recompute(layout(700.0)), Some("about"));
        assert_eq!(tracker.recompute(layout(1699.0)), Some("about"));
        assert_eq!(tracker.recompute(layout(1700.0)), Some("skills"));
    }

    #[test]
    fn test_last_section_wins_when_all_passed() {
        let mut tracker = ActiveSectionTracker::with_sections(ACTIVE_OFFSET, IDS);
        assert_eq!(tracker.recompute(layout(10_000.0)), Some("contact"));
    }

    #[test]
    fn test_scrolling_back_up_keeps_last_section() {
        let mut tracker = ActiveSectionTracker::with_sections(ACTIVE_OFFSET, IDS);
        tracker.recompute(layout(2000.0));
        assert_eq!(tracker.current(), Some("skills"));
        assert_eq!(tracker.recompute(layout(10.0)), Some("skills"));

        let mut tracker = ActiveSectionTracker::with_sections(ACTIVE_OFFSET, ["about", "skills"]);
        assert_eq!(tracker.recompute(|_| Some(0.0)), Some("skills"));
        assert_eq!(tracker.recompute(|_| Some(500.0)), Some("skills"));
    }

    #[test]
    fn test_result_is_stable_and_registered() {
        let mut tracker = ActiveSectionTracker::with_sections(ACTIVE_OFFSET, IDS);
        let mut y = 0.0;
        while y < 5000.0 {
            let first = tracker.recompute(layout(y)).map(str::to_owned);
            let second = tracker.recompute(layout(y)).map(str::to_owned);
            assert_eq!(first, second);
            if let Some(id) = first {
                assert!(IDS.contains(&id.as_str()));
            }
            y += 37.0;
        }
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut tracker = ActiveSectionTracker::with_sections(ACTIVE_OFFSET, IDS);
        let without_projects = |id: &str| {
            if id == "projects" {
                None
            } else {
                layout(2900.0)(id)
            }
        };
        assert_eq!(tracker.recompute(without_projects), Some("skills"));
        assert_eq!(tracker.recompute(|_| None), Some("skills"));
    }

    #[test]
    fn test_register_is_idempotent_and_unregister_keeps_current() {
        let mut tracker = ActiveSectionTracker::new(ACTIVE_OFFSET);
        tracker.register("about");
        tracker.register("skills");
        tracker.register("about");
        tracker.recompute(|_| Some(0.0));
        assert_eq!(tracker.current(), Some("skills"));

        tracker.unregister("about");
        assert_eq!(tracker.current(), Some("skills"));
        tracker.unregister("skills");
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_navbar_scrolled_flag() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
