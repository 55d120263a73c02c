pub mod render;
pub mod transition;

pub use render::{format_bdt, render_schedule, InstallmentLine, ScheduleDisplay};
pub use transition::{ease_out_cubic, transition_frames, TRANSITION_DURATION_MS};
