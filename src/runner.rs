use crate::client::SubscriberSource;
use crate::error::Result;
use crate::model::{self, Sample};
use crate::store::{self, LogStore};

// fetch -> validate -> sample -> merge -> persist, one pass, no retries.
pub struct Runner {
    source: Box<dyn SubscriberSource>,
    store: LogStore,
}

impl Runner {
    pub fn new(source: Box<dyn SubscriberSource>, store: LogStore) -> Self {
        Self { source, store }
    }

    pub fn run(&self) -> Result<()> {
        let count = self.source.subscribers()?;
        println!("Fetched subscriber count: {}", count);

        let sample = Sample::new(model::now(), count);

        let doc = self.store.load()?;
        let doc = store::normalize(store::append_if_changed(doc, sample));
        self.store.persist(&doc)?;

        // The file is rewritten even when the dedup check dropped the
        // sample, so the confirmation is printed unconditionally.
        println!(
            "Wrote data.json entry: time={}, count={}",
            sample.time, sample.count
        );

        Ok(())
    }
}
