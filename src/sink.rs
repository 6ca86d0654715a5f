use std::sync::Mutex;

/// Where a submitted record goes. The reference behavior logged it to the
/// console; production keeps that (via the structured log) but the sink is
/// pluggable so tests and future transports can swap it out.
pub trait SubmissionSink: Send + Sync {
    fn emit(&self, serialized: &str);
}

/// Writes each submission to the log at info level.
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn emit(&self, serialized: &str) {
        log::info!("meetup form submitted: {serialized}");
    }
}

/// Collects submissions in memory so tests can assert on them.
#[derive(Default)]
pub struct MemorySink {
    emitted: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn emitted(&self) -> Vec<String> {
        self.emitted.lock().expect("sink lock poisoned").clone()
    }
}

impl SubmissionSink for MemorySink {
    fn emit(&self, serialized: &str) {
        self.emitted
            .lock()
            .expect("sink lock poisoned")
            .push(serialized.to_string());
    }
}
