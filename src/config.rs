use log::Level;

/// Pointer idle time before the nav hides.
pub const NAV_IDLE_HIDE_MS: u32 = 2_000;
/// Grace period after the pointer leaves the nav.
pub const NAV_LEAVE_HIDE_MS: u32 = 5_000;
/// How long the contact form's success/failure banner stays up.
pub const BANNER_CLEAR_MS: u32 = 5_000;
/// Frame interval for the hand-driven animations.
pub const FRAME_MS: u32 = 16;

pub const PAST_HERO_RATIO: f64 = 0.8;
pub const HERO_LOGO_MARGIN_PX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EmailJsConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

/// EmailJS identifiers, overridable at build time through the environment.
pub fn emailjs() -> EmailJsConfig {
    EmailJsConfig {
        endpoint: "https://api.emailjs.com/api/v1.0/email/send",
        service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or("service_a8jhbv6"),
        template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_f8qjtpj"),
        public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("hdnR9F95rHGW2qBhh"),
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
