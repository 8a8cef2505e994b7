// Travel wishlist services
// Services hold the UI preferences: persistent settings, theme, session-scoped flags.

pub mod session_flags;
pub mod settings_engine;
pub mod theme_engine;
