pub mod layout;
pub mod headless;
