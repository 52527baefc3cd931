//! Pointer State - cursor position, button flags and fill color

/// Mouse button as reported by the DOM (`MouseEvent.button`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
    Other(i16),
}

impl Button {
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Button::Primary,
            2 => Button::Secondary,
            other => Button::Other(other),
        }
    }
}

/// What the frame loop should do with the cursor this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMode {
    Idle,
    Painting,
    Erasing,
}

#[derive(Clone, Debug)]
pub struct PointerState {
    position: Option<(f64, f64)>,
    painting: bool,
    erasing: bool,
    color: String,
}

impl PointerState {
    pub fn new(color: &str) -> Self {
        Self {
            position: None,
            painting: false,
            erasing: false,
            color: color.to_string(),
        }
    }

    /// Secondary button erases, every other button paints
    pub fn on_button_down(&mut self, button: Button) {
        match button {
            Button::Secondary => self.erasing = true,
            _ => self.painting = true,
        }
    }

    /// Releasing any button ends both painting and erasing
    pub fn on_button_up(&mut self) {
        self.painting = false;
        self.erasing = false;
    }

    pub fn on_move(&mut self, x: f64, y: f64) {
        self.position = Some((x, y));
    }

    pub fn set_color(&mut self, color: &str) {
        self.color.clear();
        self.color.push_str(color);
    }

    /// Last known cursor position (`None` until the first move)
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    pub fn is_painting(&self) -> bool { self.painting }

    pub fn is_erasing(&self) -> bool { self.erasing }

    pub fn color(&self) -> &str { &self.color }

    /// Erasing wins when both flags are somehow set
    pub fn mode(&self) -> PointerMode {
        if self.erasing {
            PointerMode::Erasing
        } else if self.painting {
            PointerMode::Painting
        } else {
            PointerMode::Idle
        }
    }
}
