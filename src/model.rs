use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's sleep summary, shaped as the bot ingest endpoint expects it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepReport {
    pub device_id: String,
    pub date: NaiveDate,
    pub sleep_minutes: i64,
}
