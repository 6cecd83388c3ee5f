use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Aggregated value of one category within a grouping dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationBucket {
    /// Category label (e.g., "Technology"). Serialized as the map key.
    #[serde(skip)]
    pub category: String,

    /// Sum of holding values in this category, rounded to the nearest unit
    pub value: i64,

    /// Share of total portfolio value, one decimal place
    pub percentage: f64,
}

/// Buckets for one grouping dimension, in first-occurrence order.
///
/// Serializes as a JSON object keyed by category, preserving bucket order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryAllocation {
    pub buckets: Vec<AllocationBucket>,
}

impl CategoryAllocation {
    /// Look up a bucket by category label.
    pub fn get(&self, category: &str) -> Option<&AllocationBucket> {
        self.buckets.iter().find(|b| b.category == category)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Category labels in bucket order.
    pub fn categories(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.category.as_str()).collect()
    }
}

impl Serialize for CategoryAllocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(&bucket.category, bucket)?;
        }
        map.end()
    }
}

/// Allocation of the portfolio across sectors and market-cap classes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBreakdown {
    pub by_sector: CategoryAllocation,
    pub by_market_cap: CategoryAllocation,
}
