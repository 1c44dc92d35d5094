use log::Level;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

mod macros;

/// Destination for log lines emitted by the emulator components.
///
/// Every component receives a [`Diagnostics`] handle when it is built, so
/// nothing inside the core reaches for a process-wide logger.
pub trait DiagnosticsSink {
    fn enabled(&self, _level: Level, _component: &'static str) -> bool {
        true
    }

    fn record(&self, level: Level, component: &'static str, message: fmt::Arguments);
}

/// Forwards everything to the `log` facade, using the component name as target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn enabled(&self, level: Level, component: &'static str) -> bool {
        log::log_enabled!(target: component, level)
    }

    fn record(&self, level: Level, component: &'static str, message: fmt::Arguments) {
        log::log!(target: component, level, "{}", message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub level: Level,
    pub component: &'static str,
    pub message: String,
}

/// Keeps the most recent entries in memory. Useful for hosts that want to
/// show a log panel, and for tests.
pub struct MemorySink {
    history: RefCell<VecDeque<DiagnosticEntry>>,
    capacity: usize,
}

impl MemorySink {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: RefCell::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.history.borrow().iter().cloned().collect()
    }

    pub fn count(&self, level: Level) -> usize {
        self.history
            .borrow()
            .iter()
            .filter(|entry| entry.level == level)
            .count()
    }

    pub fn clear(&self) {
        self.history.borrow_mut().clear();
    }
}

impl DiagnosticsSink for MemorySink {
    fn record(&self, level: Level, component: &'static str, message: fmt::Arguments) {
        if self.capacity == 0 {
            return;
        }
        let mut history = self.history.borrow_mut();
        while history.len() >= self.capacity {
            history.pop_front();
        }
        history.push_back(DiagnosticEntry {
            level,
            component,
            message: message.to_string(),
        });
    }
}

/// A component-scoped handle onto a shared sink.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Rc<dyn DiagnosticsSink>,
    component: &'static str,
}

impl Diagnostics {
    pub fn new(sink: Rc<dyn DiagnosticsSink>) -> Self {
        Self {
            sink,
            component: "nes",
        }
    }

    /// Same sink, different component label
    pub fn for_component(&self, component: &'static str) -> Self {
        Self {
            sink: Rc::clone(&self.sink),
            component,
        }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.sink.enabled(level, self.component)
    }

    pub fn log(&self, level: Level, message: fmt::Arguments) {
        if self.enabled(level) {
            self.sink.record(level, self.component, message);
        }
    }

    pub fn error(&self, message: fmt::Arguments) {
        self.log(Level::Error, message);
    }

    pub fn warn(&self, message: fmt::Arguments) {
        self.log(Level::Warn, message);
    }

    pub fn debug(&self, message: fmt::Arguments) {
        self.log(Level::Debug, message);
    }

    pub fn trace(&self, message: fmt::Arguments) {
        self.log(Level::Trace, message);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(Rc::new(LogSink))
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("component", &self.component)
            .finish()
    }
}
