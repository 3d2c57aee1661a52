//! Time formatting helpers
//!
//! All clock displays in the editor are rendered here so the recording
//! timer, the timeline ruler and the playback timecode agree on padding.

/// Format a whole-second counter as `MM:SS`.
///
/// Minutes are not wrapped at 60, so an hour-long recording reads `60:00`.
pub fn format_recording_time(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Format a timeline position as `M:SS` (unpadded minutes).
pub fn format_ruler_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

/// Format a fractional-seconds value as `MM:SS:FF`.
///
/// `FF` is the frame index within the current second at `frame_rate`.
pub fn format_timecode(seconds: f64, frame_rate: u32) -> String {
    let seconds = seconds.max(0.0);
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    let frames = ((seconds % 1.0) * frame_rate as f64).floor() as u64;
    format!("{:02}:{:02}:{:02}", mins, secs, frames)
}
