/// The page sections the navigation can jump to, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Accepts `about` as well as `#about`.
    pub fn from_fragment(fragment: &str) -> Option<Section> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

/// One entry of the navigation bar. Defined once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target_id: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.target_id)
    }
}

pub fn nav_items() -> Vec<NavItem> {
    Section::ALL
        .into_iter()
        .map(|s| NavItem {
            label: s.label(),
            target_id: s.id(),
        })
        .collect()
}
