use log::Level;

pub const REPOSITORY_URL: &str = "https://github.com/Vyas106/FormLab";
pub const APP_URL: &str = "https://my-form-lab-by-vyas-vishal.vercel.app/";
pub const BACKGROUND_GRID: &str = "/grid.svg";

/// Header switches to its opaque style once the page is scrolled past this.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
