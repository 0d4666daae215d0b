use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use log::{info, warn};
use crate::error::ReportError;
use crate::utils::{is_alphabetic_word, normalize_word};

pub const DEFAULT_MAX_REPORTS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Add,
    Remove,
}

impl ReportKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Add => "add_words.txt",
            ReportKind::Remove => "remove_words.txt",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Add => write!(f, "add"),
            ReportKind::Remove => write!(f, "remove"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(ReportKind::Add),
            "remove" => Ok(ReportKind::Remove),
            other => Err(format!("type must be 'add' or 'remove', got '{}'", other)),
        }
    }
}

/// Cached contents of one report file
struct ReportList {
    path: PathBuf,
    words: Vec<String>,
    index: HashSet<String>,
}

impl ReportList {
    async fn open(path: PathBuf, max: usize) -> Result<Self, ReportError> {
        let contents = match fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut list = ReportList { path, words: Vec::new(), index: HashSet::new() };
        for line in contents.lines() {
            let word = normalize_word(line);
            if word.is_empty() || list.index.contains(&word) {
                continue;
            }
            if list.words.len() >= max {
                warn!("{} holds more than {} words, ignoring the rest", list.path.display(), max);
                break;
            }
            list.index.insert(word.clone());
            list.words.push(word);
        }

        let cleaned = list.contents();
        if cleaned != contents {
            info!("Rewriting {} with {} normalized words", list.path.display(), list.words.len());
            fs::write(&list.path, cleaned).await?;
        }
        Ok(list)
    }

    /// File contents for the cached words, one per line
    fn contents(&self) -> String {
        self.words.iter().map(|w| format!("{}\n", w)).collect()
    }

    /// Append one line; on a failed write the file is cut back to its old length
    async fn append_line(&self, word: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path).await?;
        let len = file.metadata().await?.len();
        let line = format!("{}\n", word);

        if let Err(e) = write_line(&mut file, line.as_bytes()).await {
            warn!("Partial write to {}, truncating to {} bytes", self.path.display(), len);
            file.set_len(len).await?;
            return Err(e);
        }
        Ok(())
    }
}

async fn write_line(file: &mut fs::File, line: &[u8]) -> std::io::Result<()> {
    file.write_all(line).await?;
    file.flush().await
}

/// Two capped, deduplicated word lists written through to flat files.
/// Each list has its own lock, held across the file write.
pub struct ReportStore {
    add: Mutex<ReportList>,
    remove: Mutex<ReportList>,
    max: usize,
}

impl ReportStore {
    pub async fn open(dir: &Path, max: usize) -> Result<Self, ReportError> {
        fs::create_dir_all(dir).await?;
        let add = ReportList::open(dir.join(ReportKind::Add.file_name()), max).await?;
        let remove = ReportList::open(dir.join(ReportKind::Remove.file_name()), max).await?;
        info!(
            "Report store at {}: {} add, {} remove (max {})",
            dir.display(),
            add.words.len(),
            remove.words.len(),
            max
        );

        Ok(ReportStore {
            add: Mutex::new(add),
            remove: Mutex::new(remove),
            max,
        })
    }

    fn list(&self, kind: ReportKind) -> &Mutex<ReportList> {
        match kind {
            ReportKind::Add => &self.add,
            ReportKind::Remove => &self.remove,
        }
    }

    /// Append a word to a list. Already present words are accepted silently.
    pub async fn append(&self, kind: ReportKind, word: &str) -> Result<(), ReportError> {
        let word = normalize_word(word);
        if !is_alphabetic_word(&word) {
            return Err(ReportError::InvalidWord);
        }

        let mut list = self.list(kind).lock().await;
        if list.index.contains(&word) {
            return Ok(());
        }
        if list.words.len() >= self.max {
            warn!("Rejected {} report for {}: list is full", kind, word);
            return Err(ReportError::CapacityExceeded { kind, max: self.max });
        }

        list.append_line(&word).await?;

        list.index.insert(word.clone());
        list.words.push(word.clone());
        info!("Reported word for {}: {}", kind, word);
        Ok(())
    }

    pub async fn read(&self, kind: ReportKind) -> Vec<String> {
        self.list(kind).lock().await.words.clone()
    }

    /// Snapshot of (add, remove) taken under both locks
    pub async fn read_all(&self) -> (Vec<String>, Vec<String>) {
        let add = self.add.lock().await;
        let remove = self.remove.lock().await;
        (add.words.clone(), remove.words.clone())
    }

    /// Empty both lists on disk and in memory.
    /// Both locks are taken (add, then remove) before either file is touched,
    /// and the cache is only reset once both files are truncated.
    pub async fn clear(&self) -> Result<(), ReportError> {
        let mut add = self.add.lock().await;
        let mut remove = self.remove.lock().await;

        fs::write(&add.path, b"").await?;
        fs::write(&remove.path, b"").await?;

        for list in [&mut *add, &mut *remove] {
            list.words.clear();
            list.index.clear();
        }
        info!("Cleared reported words");
        Ok(())
    }
}
