#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub cover: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "New project at Pollachi",
        category: "Residential",
        cover: "https://5.imimg.com/data5/SELLER/Default/2023/9/341417050/PZ/AJ/YZ/51126412/commercial-building-design-500x500.jpg",
    },
    Project {
        id: 2,
        title: "Home Project at Coimbatore",
        category: "Residential",
        cover: "https://5.imimg.com/data5/ANDROID/Default/2025/9/541496630/QS/AZ/OU/161975083/product-jpeg-500x500.jpg",
    },
    Project {
        id: 3,
        title: "Project at Pollachi",
        category: "Residential",
        cover: "https://i.pinimg.com/originals/1d/67/e1/1d67e16db2edaf38d7a4d6a39ca6dd12.jpg",
    },
    Project {
        id: 4,
        title: "Modern home at Coimbatore",
        category: "Residential",
        cover: "https://i.pinimg.com/236x/d2/22/19/d22219c23aece45c58e3f5849428062b.jpg",
    },
];

const GALLERY_1: &[&str] = &[
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800",
    "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=800",
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800",
];

const GALLERY_2: &[&str] = &[
    "https://images.unsplash.com/photo-1600607687644-c7171b42498f?w=800",
    "https://images.unsplash.com/photo-1600607688969-a5bfcd646154?w=800",
    "https://images.unsplash.com/photo-1600566752355-35792bedcfea?w=800",
    "https://images.unsplash.com/photo-1600573472591-ee6b68d14c68?w=800",
];

const GALLERY_3: &[&str] = &[
    "https://images.unsplash.com/photo-1600607688097-df92c42462e0?w=800",
    "https://images.unsplash.com/photo-1600607688066-890987a5e0e7?w=800",
    "https://images.unsplash.com/photo-1600607688080-9e3c8b7f2b38?w=800",
];

/// Gallery images of a project. Unknown projects have none.
pub fn gallery_for(project_id: u32) -> &'static [&'static str] {
    match project_id {
        1 => GALLERY_1,
        2 => GALLERY_2,
        // Projects 3 and 4 share a photo set.
        3 | 4 => GALLERY_3,
        _ => &[],
    }
}

/// Which project's gallery is expanded. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GallerySelection {
    selected: Option<u32>,
}

impl GallerySelection {
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_open(&self, project_id: u32) -> bool {
        self.selected == Some(project_id)
    }

    /// Clicking the open project closes it; clicking another opens that one.
    pub fn toggle(self, project_id: u32) -> Self {
        let selected = if self.is_open(project_id) {
            None
        } else {
            Some(project_id)
        };
        Self { selected }
    }

    /// Images to show under `project_id`; empty when it is closed or has
    /// no gallery.
    pub fn visible_images(&self, project_id: u32) -> &'static [&'static str] {
        if self.is_open(project_id) {
            gallery_for(project_id)
        } else {
            &[]
        }
    }
}
