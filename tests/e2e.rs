use std::fs;
use std::path::PathBuf;

use substats::client::SubscriberSource;
use substats::error::{Error, Result};
use substats::model::{Sample, SubscriberCount};
use substats::runner::Runner;
use substats::store::{LogDocument, LogStore};

struct StaticSource(SubscriberCount);

impl SubscriberSource for StaticSource {
    fn subscribers(&self) -> Result<SubscriberCount> {
        Ok(self.0)
    }
}

struct FailingSource;

impl SubscriberSource for FailingSource {
    fn subscribers(&self) -> Result<SubscriberCount> {
        Err(Error::new("connection reset by peer"))
    }
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("substats-{}-{}.json", name, std::process::id()))
}

fn run_once(path: &PathBuf, count: SubscriberCount) -> Result<()> {
    Runner::new(Box::new(StaticSource(count)), LogStore::new(path)).run()
}

#[test]
fn empty_start_appends_one_sample() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let path = scratch_path("empty-start");
    let _ = fs::remove_file(&path);

    run_once(&path, 42)?;

    let raw = fs::read_to_string(&path)?;
    assert!(
        raw.starts_with("{\n  \"logs\": ["),
        "expected 2-space pretty printing, got: {}",
        raw
    );

    let doc: LogDocument = serde_json::from_str(&raw)?;
    assert_eq!(1, doc.logs.len());
    assert_eq!(42, doc.logs[0].count);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn repeated_runs_deduplicate_unchanged_counts() -> std::result::Result<(), Box<dyn std::error::Error>>
{
    let path = scratch_path("dedup");
    let _ = fs::remove_file(&path);

    run_once(&path, 42)?;
    run_once(&path, 42)?;

    let store = LogStore::new(&path);
    assert_eq!(1, store.load()?.logs.len());

    run_once(&path, 43)?;

    let counts: Vec<SubscriberCount> = store.load()?.logs.iter().map(|s| s.count).collect();
    assert_eq!(vec![42, 43], counts);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn failed_fetch_leaves_no_file_behind() {
    let path = scratch_path("failed-fetch");
    let _ = fs::remove_file(&path);

    let result = Runner::new(Box::new(FailingSource), LogStore::new(&path)).run();

    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn persisted_document_round_trips() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let path = scratch_path("round-trip");
    let store = LogStore::new(&path);

    let doc = LogDocument {
        logs: vec![Sample::new(1, 10), Sample::new(2, 20), Sample::new(3, 10)],
    };
    store.persist(&doc)?;

    assert_eq!(doc, store.load()?);

    fs::remove_file(&path)?;
    Ok(())
}
