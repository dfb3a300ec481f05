pub mod desktop;

pub use desktop::site_layout;
