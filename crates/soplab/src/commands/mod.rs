pub mod check;
pub mod departments;
pub mod render;
pub mod sops;
pub mod templates;
