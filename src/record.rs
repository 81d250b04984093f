use chrono::Local;
use uuid::Uuid;

use crate::classify::Classification;

/// Finalized set of fields written to the flat log and the database for one
/// run. Built immediately before logging and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CallRecord {
    /// DD/MM/YYYY
    pub date: String,
    /// HH:MM:SS, truncated to whole seconds
    pub time: String,
    /// Fresh v4 identifier for this run
    pub uuid: String,
    /// Classification label
    pub result: String,
    /// Normalized 11-digit phone number
    pub phone: String,
    /// Recording length in seconds
    pub duration: f64,
    /// Transcript returned by the recognition service
    pub text: String,
}

impl CallRecord {
    /// Assemble the record from the classification outcome and run parameters
    ///
    /// Takes the wall clock exactly once. No validation happens here; the
    /// invocation layer has already normalized phone and stage.
    pub fn assemble(result: Classification, phone: &str, duration: f64, text: &str) -> Self {
        let now = Local::now();
        Self {
            date: now.format("%d/%m/%Y").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            uuid: Uuid::new_v4().to_string(),
            result: result.as_str().to_string(),
            phone: phone.to_string(),
            duration,
            text: text.to_string(),
        }
    }

    /// Render the semicolon-joined flat log line, blank separator included
    pub fn to_log_line(&self) -> String {
        format!(
            "{}; {}; {}; {}; {}; {:.2}; {}\n\n",
            self.date, self.time, self.uuid, self.result, self.phone, self.duration, self.text
        )
    }
}
