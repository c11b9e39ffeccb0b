use std::{
    sync::{Mutex, MutexGuard, OnceLock, PoisonError, RwLock},
    time::{Duration, Instant},
};

use log::{Level, Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

const DEFAULT_DECAY: Duration = Duration::from_secs(5);
const DEFAULT_MAX_VISIBLE: usize = 3;

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(Level::Warn, DEFAULT_DECAY, DEFAULT_MAX_VISIBLE))
}

/// Installs the in-memory logger as the global one.
pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    if verbose {
        logger.set_min_level(Level::Debug);
    }

    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[derive(Clone, Debug)]
pub struct Message {
    pub level: Level,
    pub pushed: Instant,
    pub message: String,
    pub source: String,
}

impl Message {
    pub fn line(&self) -> String {
        format!("[{}] {}: {}", self.level, self.source, self.message)
    }
}

#[derive(Default)]
struct Logs {
    logs: [Vec<Message>; 5], // one per level
}

impl Logs {
    fn push(&mut self, message: Message) {
        self.logs[message.level as usize - 1].insert(0, message);
    }

    fn clear_old(&mut self, decay: Duration) {
        let now = Instant::now();
        for level in self.logs.iter_mut() {
            level.retain(|msg| now.duration_since(msg.pushed) < decay);
        }
    }
}

/// Collects log records in memory so they can be drawn on screen.
///
/// Messages are kept per level, most severe first, and dropped once older than `decay`.
pub struct AppLogger {
    min_level: RwLock<Level>,
    pub decay: Duration,
    pub max_visible: usize,
    logs: Mutex<Logs>,
}

impl AppLogger {
    fn new(min_level: Level, decay: Duration, max_visible: usize) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            decay,
            max_visible,
            logs: Mutex::new(Logs::default()),
        }
    }

    pub fn min_level(&self) -> Level {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: Level) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    fn borrow_mut_logs(&self) -> MutexGuard<Logs> {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Recent messages, at most `max_visible` of them.
    pub fn get_logs(&self) -> Vec<Message> {
        let mut logs = self.borrow_mut_logs();
        logs.clear_old(self.decay);

        logs.logs
            .iter()
            .flatten()
            .take(self.max_visible)
            .cloned()
            .collect()
    }

    pub fn switch_debug(&self) {
        if self.min_level() == Level::Debug {
            self.set_min_level(Level::Warn);
        } else {
            self.set_min_level(Level::Debug);
        }
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.borrow_mut_logs().push(Message {
                level: record.level(),
                pushed: Instant::now(),
                message: record.args().to_string(),
                source: record.module_path().unwrap_or("unknown").to_string(),
            });
        }
    }

    fn flush(&self) {}
}
