use crate::registration::flow::FlowTimings;

const DEFAULT_VIDEO_ID: &str = "dQw4w9WgXcQ";

/// YouTube id of the intro video, overridable at build time with `LANDING_VIDEO_ID`.
pub fn get_video_id() -> &'static str {
    option_env!("LANDING_VIDEO_ID").unwrap_or(DEFAULT_VIDEO_ID)
}

/// Tunables for the landing page. `Default` carries the production values.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    pub timings: FlowTimings,
    /// Spots shown when nothing (or garbage) is stored under `spots_left`
    pub default_spots: u32,
    /// Background decay never takes the counter below this
    pub spots_floor: u32,
    pub decay_probability: f64,
    /// Decay period is picked once per page load from this range
    pub decay_interval_ms: std::ops::Range<u32>,
    pub auto_popup_delay_ms: u32,
    pub countdown_hours: i64,
    pub video_id: String,
    pub submit_label: String,
    pub busy_label: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            timings: FlowTimings::default(),
            default_spots: 47,
            spots_floor: 10,
            decay_probability: 0.3,
            decay_interval_ms: 120_000..300_000,
            auto_popup_delay_ms: 30_000,
            countdown_hours: 24,
            video_id: get_video_id().to_string(),
            submit_label: "Reserve My Free Spot".to_string(),
            busy_label: "Registering...".to_string(),
        }
    }
}
