pub mod api;
pub mod commands;
pub mod events;
pub mod notifier;
pub mod state;
