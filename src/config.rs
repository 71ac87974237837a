//! Tunables for every page behavior.
//!
//! Markup is the only runtime configuration (`data-percent`, `data-category`,
//! `data-filter`, ...). Everything else is fixed here and handed to each
//! behavior at construction time.

#[derive(Debug, Clone, Copy)]
pub struct LoaderConfig {
    pub overlay_id: &'static str,
    pub hide_delay_ms: i32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            overlay_id: "loader",
            hide_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CursorConfig {
    pub lead_selector: &'static str,
    pub trail_selector: &'static str,
    /// Elements that switch the trailing indicator into its hover style.
    pub interactive_selector: &'static str,
    pub hover_class: &'static str,
    pub trail_delay_ms: i32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            lead_selector: ".cursor",
            trail_selector: ".cursor-follower",
            interactive_selector: "a, button, .close-modal, input, textarea",
            hover_class: "cursor-hover",
            trail_delay_ms: 50,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HeroConfig {
    pub container_id: &'static str,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_depth: f32,
    pub particle_count: usize,
    /// Side length of the cube the particles are scattered in.
    pub spread: f32,
    pub point_size: f32,
    pub color: u32,
    pub opacity: f32,
    /// Constant per-frame rotation added on both axes (radians).
    pub drift: f32,
    /// Fraction of the remaining distance to the pointer target covered per frame.
    pub damping: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            container_id: "canvas-container",
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_depth: 3.0,
            particle_count: 2000,
            spread: 15.0,
            point_size: 0.02,
            color: 0x64ffda,
            opacity: 0.8,
            drift: 0.001,
            damping: 0.05,
        }
    }
}

impl HeroConfig {
    /// Accent color as normalized RGB.
    pub fn rgb(&self) -> [f32; 3] {
        let channel = |shift: u32| ((self.color >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RevealConfig {
    pub target_selector: &'static str,
    pub visible_class: &'static str,
    pub threshold: f64,
    pub bar_selector: &'static str,
    pub fill_selector: &'static str,
    pub percent_attribute: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            target_selector: ".hidden-element, #skills",
            visible_class: "visible",
            threshold: 0.2,
            bar_selector: ".skill-bar-container",
            fill_selector: ".progress",
            percent_attribute: "data-percent",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FilterConfig {
    pub button_selector: &'static str,
    pub card_selector: &'static str,
    pub active_class: &'static str,
    pub filter_attribute: &'static str,
    pub category_attribute: &'static str,
    pub show_delay_ms: i32,
    pub hide_delay_ms: i32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            button_selector: ".filter-btn",
            card_selector: ".project-card",
            active_class: "active",
            filter_attribute: "data-filter",
            category_attribute: "data-category",
            show_delay_ms: 100,
            hide_delay_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ModalConfig {
    pub backdrop_class: &'static str,
    pub open_attribute: &'static str,
    pub close_attribute: &'static str,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            backdrop_class: "modal",
            open_attribute: "data-modal-open",
            close_attribute: "data-modal-close",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MapConfig {
    pub element_id: &'static str,
    pub center: (f64, f64),
    pub zoom: f64,
    pub tile_url: &'static str,
    pub attribution: &'static str,
    pub popup: &'static str,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            element_id: "map",
            center: (43.2609, -79.9192),
            zoom: 13.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            attribution: "&copy; OpenStreetMap contributors",
            popup: "Kenil Sachapara<br>Hamilton, ON",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContactConfig {
    pub form_id: &'static str,
    pub name_id: &'static str,
    pub email_id: &'static str,
    pub sent_label: &'static str,
    pub sent_background: &'static str,
    pub sent_color: &'static str,
    pub reset_delay_ms: i32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm",
            name_id: "name",
            email_id: "email",
            sent_label: "Sent!",
            sent_background: "var(--primary)",
            sent_color: "var(--bg-color)",
            reset_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavConfig {
    pub toggle_selector: &'static str,
    pub menu_selector: &'static str,
    pub open_class: &'static str,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".hamburger",
            menu_selector: ".nav-links",
            open_class: "nav-active",
        }
    }
}

/// Every behavior's tunables, in attach order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageConfig {
    pub loader: LoaderConfig,
    pub cursor: CursorConfig,
    pub hero: HeroConfig,
    pub reveal: RevealConfig,
    pub filter: FilterConfig,
    pub modal: ModalConfig,
    pub map: MapConfig,
    pub contact: ContactConfig,
    pub nav: NavConfig,
}
