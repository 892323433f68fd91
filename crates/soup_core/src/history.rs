use soup_data::LiveEvent;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends [`LiveEvent`]s to `<dir>/live.jsonl`, one JSON object per line.
pub struct HistoryLogger {
    live_file: Option<BufWriter<File>>,
    log_dir: PathBuf,
}

impl HistoryLogger {
    pub fn new_at(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("live.jsonl"))?;
        Ok(Self {
            live_file: Some(BufWriter::new(file)),
            log_dir: dir.to_path_buf(),
        })
    }

    /// A logger that discards everything.
    pub fn new_dummy() -> Self {
        Self {
            live_file: None,
            log_dir: PathBuf::new(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.live_file.is_some()
    }

    pub fn log_event(&mut self, event: &LiveEvent) -> anyhow::Result<()> {
        if let Some(ref mut file) = self.live_file {
            let json = serde_json::to_string(event)?;
            writeln!(file, "{}", json)?;
        }
        Ok(())
    }

    pub fn log_all<'a>(&mut self, events: impl IntoIterator<Item = &'a LiveEvent>) -> anyhow::Result<()> {
        for event in events {
            self.log_event(event)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        if let Some(ref mut file) = self.live_file {
            file.flush()?;
        }
        Ok(())
    }

    /// Reads back every parseable event; malformed lines are skipped.
    pub fn read_events(&self) -> anyhow::Result<Vec<LiveEvent>> {
        let file = match File::open(self.log_dir.join("live.jsonl")) {
            Ok(f) => f,
            Err(_) => return Ok(vec![]),
        };
        let reader = BufReader::new(file);
        Ok(reader
            .lines()
            .map_while(Result::ok)
            .filter_map(|l| serde_json::from_str::<LiveEvent>(&l).ok())
            .collect())
    }
}
