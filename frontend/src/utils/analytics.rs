use crate::registration::flow::Submission;

/// Hands a completed registration to analytics. There is no collector yet,
/// so the payload goes to the log as JSON.
pub fn track_registration(submission: &Submission) {
    match serde_json::to_string(submission) {
        Ok(payload) => log::info!("Registration successful: {}", payload),
        Err(e) => log::error!("Failed to serialize registration: {}", e),
    }
}
