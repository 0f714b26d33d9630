use std::io;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

pub fn level_filter(log_level: &str) -> log::LevelFilter {
    match log_level {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        _ => log::LevelFilter::Warn,
    }
}

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    env_logger::Builder::new()
        .filter_level(level_filter(log_level))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

// 轉換期間顯示的 spinner，隱藏模式下所有操作皆為 no-op
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
                pb.set_style(style);
            }
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, action: &str) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(action.to_string());
    }

    /// 暫停 spinner 後輸出到 stdout，避免與 spinner 混在同一行
    pub fn println(&self, line: &str) {
        self.pb.suspend(|| println!("{}", line));
    }

    pub fn finish(&self) {
        if self.no_progress {
            return;
        }
        log::debug!("轉換耗時 {:.2?}", self.start.elapsed());
        self.pb.finish_and_clear();
    }
}

impl Drop for ProgressManager {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
