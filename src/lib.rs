pub mod audio;
pub mod classify;
pub mod config;
pub mod invocation;
pub mod pipeline;
pub mod record;
pub mod sinks;
pub mod stt;

pub use audio::{inspect, AudioConfig};
pub use classify::{classify_presence, classify_sentiment, Classification, Stage};
pub use config::Config;
pub use invocation::{normalize_phone, Invocation, InvocationError, RawArgs};
pub use record::CallRecord;
pub use stt::{SttClient, SttConfig};
