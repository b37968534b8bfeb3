pub mod board;
pub mod edges;
pub mod hud;
pub mod interactions;
pub mod layout;
pub mod nodes;
pub mod plugin;

pub use plugin::BoardPlugin;
