//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `app`, `chat`, `map_view`) so
//! individual components can depend on small focused models. Each struct is
//! held in an `RwSignal` provided via context at the app root, and every
//! mutation funnels through a named setter method, no implicit globals.

pub mod app;
pub mod chat;
pub mod map_view;
pub mod session;
