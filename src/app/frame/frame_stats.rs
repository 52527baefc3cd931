use serde::Serialize;

/// What the last frame did
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrameStats {
    pub frame: u64,
    pub events_applied: u32,
    pub cells_drawn: u32,
    pub shapes_drawn: u32,
    pub painted: bool,
    pub erased: bool,
    pub picker_moved: bool,
    pub frame_ms: f64,
}

impl FrameStats {
    pub fn to_json(&self) -> String {
        // Plain numbers and bools only
        serde_json::to_string(self).unwrap_or_default()
    }
}
