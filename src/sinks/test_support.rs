use std::sync::Mutex;

use crate::dispatch::RequestOutcome;

use super::EventSink;

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    events: Mutex<Vec<(usize, RequestOutcome)>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<(usize, RequestOutcome)> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventSink for RecordingSink {
    fn job_finished(&self, index: usize, outcome: &RequestOutcome) {
        if let Ok(mut events) = self.events.lock() {
            events.push((index, outcome.clone()));
        }
    }
}
