use std::fmt;

/// Top-level page sections. `id()` is the DOM id the navbar scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Sections linked from the navbar and footer, in document order.
    pub const NAV: [SectionId; 4] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        [
            SectionId::Hero,
            SectionId::About,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Contact,
        ]
        .into_iter()
        .find(|s| s.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for s in SectionId::NAV {
            assert_eq!(SectionId::from_id(s.id()), Some(s));
        }
        assert_eq!(SectionId::from_id("hero"), Some(SectionId::Hero));
        assert_eq!(SectionId::from_id("blog"), None);
        assert_eq!(SectionId::Projects.href(), "#projects");
    }
}
