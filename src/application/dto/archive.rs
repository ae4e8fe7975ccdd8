use crate::domain::archive::ArchiveBucket;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveBucketDto {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub count: u64,
}

impl From<ArchiveBucket> for ArchiveBucketDto {
    fn from(bucket: ArchiveBucket) -> Self {
        Self {
            year: bucket.period.year(),
            month: bucket.period.month(),
            month_name: bucket.month_label().to_string(),
            count: bucket.count,
        }
    }
}
