//! Result sink that records everything it is given

use std::sync::Mutex;

use scrivener_client::ResultSink;

#[derive(Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<String>>,
    displayed: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn displayed(&self) -> Vec<String> {
        self.displayed.lock().unwrap().clone()
    }

    /// Current content of the result display
    pub fn text(&self) -> Option<String> {
        self.displayed.lock().unwrap().last().cloned()
    }
}

impl ResultSink for RecordingSink {
    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_owned());
    }

    fn display(&self, text: &str) {
        self.displayed.lock().unwrap().push(text.to_owned());
    }
}
