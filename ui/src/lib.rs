//! Shared UI crate for DataChef Studio. Cross-platform lesson logic and views
//! live here; the raster summary pipeline and the logbook sink are native-only.

pub mod core;
#[cfg(not(target_arch = "wasm32"))]
pub mod sink;
pub mod summary;
pub mod views;

pub mod components {
    // Shared application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
