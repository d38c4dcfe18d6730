use crate::modules::work_timers::client::notifier::{NoticeLevel, Notifier};
use std::sync::Mutex;

/// Keeps every notice for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(NoticeLevel, String)> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn count(&self, level: NoticeLevel) -> usize {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|(recorded, _)| *recorded == level)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
