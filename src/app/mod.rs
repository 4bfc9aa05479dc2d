//! Application module - the editor controller.
//!
//! - `types` - Menus, editor sessions, outline and inspector views
//! - `state` - The `Editor` struct
//! - `lifecycle` - Construction, settings reload, frame pass
//! - `commands` - Selection-based commands, context menu, script editor
//! - `outline` - Sidebar listing, inspector, outline-to-canvas drag

mod commands;
mod lifecycle;
mod outline;
mod state;
mod types;

pub use state::Editor;
pub use types::*;
