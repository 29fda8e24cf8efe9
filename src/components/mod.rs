//! Reusable view components for the dashboard shell.

pub mod chat_bot;
pub mod header;
pub mod map_panel;
pub mod sidebar;
pub mod video_player;
