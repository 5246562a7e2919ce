use std::ffi::OsStr;
use std::time::{Duration, Instant};

pub(super) const DEBOUNCE_MS: u64 = 300;

/// How long to block when nothing is pending.
const IDLE_WAIT: Duration = Duration::from_secs(86400);

/// Pure debouncer: only handles timing and event filtering.
/// No business logic, no store access.
pub(super) struct Debouncer {
    pub(super) pending: bool,
    pub(super) last_event: Option<Instant>,
}

impl Debouncer {
    pub(super) fn new() -> Self {
        Self {
            pending: false,
            last_event: None,
        }
    }

    /// Record a notify event if it touches `file_name`.
    ///
    /// Returns whether the event was relevant.
    pub(super) fn add_event(&mut self, event: &notify::Event, file_name: &OsStr) -> bool {
        use notify::EventKind;

        match event.kind {
            EventKind::Create(_) | EventKind::Remove(_) => {}
            // Ignore metadata-only changes (mtime/atime/chmod noise)
            EventKind::Modify(notify::event::ModifyKind::Metadata(_)) => return false,
            EventKind::Modify(_) => {}
            _ => return false,
        }

        let touches = event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(file_name));
        if !touches {
            return false;
        }

        crate::debug!("watch"; "event {:?} {:?}", event.kind, event.paths);
        self.pending = true;
        self.last_event = Some(Instant::now());
        true
    }

    /// Consume the pending change once the debounce window has passed.
    pub(super) fn take_if_ready(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.pending = false;
        self.last_event = None;
        true
    }

    pub(super) fn is_ready(&self) -> bool {
        match self.last_event {
            Some(last_event) if self.pending => {
                last_event.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
            }
            _ => false,
        }
    }

    /// Time to wait for the next event before re-checking readiness.
    pub(super) fn sleep_duration(&self) -> Duration {
        let Some(last_event) = self.last_event else {
            return IDLE_WAIT;
        };

        Duration::from_millis(DEBOUNCE_MS)
            .saturating_sub(last_event.elapsed())
            .max(Duration::from_millis(1))
    }
}
