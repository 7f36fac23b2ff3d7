//! Terminal rendering layer.
//!
//! Renders into a plain framebuffer of styled character cells (no widget or
//! layout framework) that is flushed to the terminal with crossterm.
//!
//! - [`fb`]: the framebuffer, pure data
//! - [`game_view`]: session state -> framebuffer, pure and testable
//! - [`renderer`]: raw-mode/alternate-screen lifecycle and frame flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Rgb, Style, PLAIN};
pub use game_view::{GameView, Viewport};
pub use renderer::Screen;
