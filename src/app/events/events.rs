use crate::core::Button;

use super::PaintCore;

/// Input delivered between frames
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    ButtonDown(Button),
    ButtonUp,
    ColorChanged(String),
    Resize { width: u32, height: u32 },
}

pub(super) fn push(core: &mut PaintCore, event: InputEvent) {
    core.pending.push_back(event);
}

pub(super) fn apply_pending(core: &mut PaintCore) -> usize {
    let mut applied = 0;
    while let Some(event) = core.pending.pop_front() {
        apply(core, event);
        applied += 1;
    }
    applied
}

fn apply(core: &mut PaintCore, event: InputEvent) {
    match event {
        InputEvent::PointerMove { x, y } => core.pointer.on_move(x, y),
        InputEvent::ButtonDown(button) => core.pointer.on_button_down(button),
        InputEvent::ButtonUp => core.pointer.on_button_up(),
        InputEvent::ColorChanged(color) => core.pointer.set_color(&color),
        InputEvent::Resize { width, height } => {
            if let Err(e) = super::commands::rebuild(core, width, height) {
                console_warn!("resize to {}x{} ignored: {}", width, height, e);
            }
        }
    }
}
