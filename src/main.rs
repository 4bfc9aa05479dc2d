//! Headless run of the editor: builds a scene, replays a short drag, and
//! runs a few frame passes against an in-memory surface.

use anyhow::Result;
use spritedesk::input::{MouseDownEvent, MouseMoveEvent, MouseUpEvent};
use spritedesk::render::DrawList;
use spritedesk::settings::default_settings_path;
use spritedesk::Editor;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const DEMO_FRAMES: usize = 3;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut editor = Editor::new();
    if let Some(path) = default_settings_path().filter(|p| p.exists()) {
        editor.watch_settings(path);
    }

    // Drag the demo sprite and drop a copy of it.
    editor.handle_mouse_down(&MouseDownEvent::primary(110.0, 110.0));
    editor.handle_mouse_move(&MouseMoveEvent::at(210.0, 160.0));
    editor.handle_mouse_up(&MouseUpEvent::primary(210.0, 160.0));
    editor.duplicate_selected();

    let mut surface = DrawList::new();
    editor.start();
    let mut now = Instant::now();
    for _ in 0..DEMO_FRAMES {
        editor.check_settings_reload();
        let Some(next_in) = editor.run_frame(now, &mut surface) else {
            break;
        };
        now += next_in;
    }
    editor.stop();

    for entry in editor.outline() {
        let sprite = editor.scene.get(entry.id);
        let position = sprite.map(|s| s.position).unwrap_or_default();
        tracing::info!(name = %entry.name, x = position.0, y = position.1, selected = entry.selected, "Sprite");
    }
    tracing::info!(frames = surface.frame_count(), commands = surface.commands().len(), "Done");

    Ok(())
}
