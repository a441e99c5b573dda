use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

pub type SubscriberCount = u64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: Timestamp,
    pub count: SubscriberCount,
}

impl Sample {
    pub fn new(time: Timestamp, count: SubscriberCount) -> Self {
        Self { time, count }
    }
}
