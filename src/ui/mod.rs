//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus
//! - **[`panes`]** — stateless render functions for each visible pane (source,
//!   AST, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a file name and
//! its source text and call [`App::run`] to start the event loop. The explorer
//! only reads the parsed tree; it never modifies it.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
