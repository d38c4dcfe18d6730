// User-visible notices (toasts).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);

    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

/// Writes notices to the log. Used when no UI surface is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => tracing::info!(target: "work_timers::notice", "{message}"),
            NoticeLevel::Success => tracing::info!(target: "work_timers::notice", success = true, "{message}"),
            NoticeLevel::Error => tracing::warn!(target: "work_timers::notice", "{message}"),
        }
    }
}
