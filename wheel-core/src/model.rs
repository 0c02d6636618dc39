use serde::{Deserialize, Serialize};

/// One labeled option on the wheel. The editing collaborator owns mutation;
/// the engine only ever reads these.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub label: String,
    /// CSS color string, e.g. "#EF4444".
    pub color: String,
}

impl Segment {
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Segment {
            id: id.into(),
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Per-wheel tuning knobs, stored under `settings` in the persisted JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSettings {
    /// How many times the segment list repeats around the ring. Zero yields
    /// an empty ring, which renders as a static frame and ignores input.
    pub repeat: u32,
    /// Spin duration in seconds.
    pub duration: f64,
    /// Label size level, 1..=5. Pixel size is `10 + level * 3`.
    pub font_size: u8,
    /// Remove the winning segment from the ring after each spin.
    #[serde(default)]
    pub auto_disable: bool,
}

impl Default for WheelSettings {
    fn default() -> Self {
        WheelSettings {
            repeat: 2,
            duration: 3.0,
            font_size: 4,
            auto_disable: false,
        }
    }
}

/// Full wheel definition as supplied by the editing collaborator.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WheelConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub settings: WheelSettings,
}

impl WheelConfig {
    /// Clamp out-of-range settings and fill blank segment colors from the
    /// preset palette. A zero repeat count is kept as-is: the empty ring is
    /// a defined inert state, not an error.
    pub fn sanitize(&mut self) {
        self.settings.font_size = self.settings.font_size.clamp(1, 5);
        if !(self.settings.duration > 0.0) {
            self.settings.duration = WheelSettings::default().duration;
        }
        for (i, seg) in self.segments.iter_mut().enumerate() {
            if seg.color.trim().is_empty() {
                seg.color = preset_color(i).to_string();
            }
        }
    }

    /// Label pixel size for the configured font level.
    pub fn font_px(&self) -> f64 {
        10.0 + f64::from(self.settings.font_size) * 3.0
    }
}

/// Fixed categorical palette used when a segment arrives without a color.
/// Colors are stable and cycle by index % 10.
pub fn preset_color(i: usize) -> &'static str {
    const PALETTE: [&str; 10] = [
        "#EF4444", // red
        "#F97316", // orange
        "#F59E0B", // amber
        "#84CC16", // lime
        "#10B981", // emerald
        "#06B6D4", // cyan
        "#3B82F6", // blue
        "#6366F1", // indigo
        "#8B5CF6", // violet
        "#EC4899", // pink
    ];
    PALETTE[i % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_persisted_wheel_shape() {
        let json = r##"{
            "id": "w1",
            "name": "What to eat?",
            "segments": [
                { "id": "1", "label": "Pizza", "color": "#EF4444" },
                { "id": "2", "label": "Sushi", "color": "#F59E0B" }
            ],
            "settings": { "repeat": 2, "duration": 3, "fontSize": 4 }
        }"##;
        let cfg: WheelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.segments.len(), 2);
        assert_eq!(cfg.settings.repeat, 2);
        assert_eq!(cfg.settings.font_size, 4);
        assert!(!cfg.settings.auto_disable);
    }

    #[test]
    fn sanitize_clamps_and_fills_colors() {
        let mut cfg = WheelConfig {
            segments: vec![
                Segment::new("1", "A", ""),
                Segment::new("2", "B", "#123456"),
            ],
            settings: WheelSettings {
                repeat: 0,
                duration: -1.0,
                font_size: 9,
                auto_disable: false,
            },
            ..Default::default()
        };
        cfg.sanitize();
        assert_eq!(cfg.settings.font_size, 5);
        assert!(cfg.settings.duration > 0.0);
        // zero repeat survives sanitize; it means an inert wheel
        assert_eq!(cfg.settings.repeat, 0);
        assert_eq!(cfg.segments[0].color, preset_color(0));
        assert_eq!(cfg.segments[1].color, "#123456");
    }

    #[test]
    fn font_px_is_linear_in_level() {
        let mut cfg = WheelConfig::default();
        cfg.settings.font_size = 1;
        assert!((cfg.font_px() - 13.0).abs() < 1e-9);
        cfg.settings.font_size = 5;
        assert!((cfg.font_px() - 25.0).abs() < 1e-9);
    }
}
