// File: crates/chart-shape/src/indices.rs
// Summary: Per-family ordinal slots for visible series, partitioned by x-scale key on multi-x charts.

use ahash::AHashMap;
use indexmap::IndexMap;

use crate::config::ShapeConfig;
use crate::series::Series;

/// Dense, zero-based ordinals for one (x-scale, shape family) bucket.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexBucket {
    ordinals: IndexMap<String, usize>,
    max: Option<usize>,
    next: usize,
}

impl IndexBucket {
    pub fn get(&self, id: &str) -> Option<usize> {
        self.ordinals.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ordinals.contains_key(id)
    }

    /// Highest ordinal handed out, `None` while the bucket is empty.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Number of slots (`max + 1`), at least 1.
    pub fn target_count(&self) -> usize {
        self.max.unwrap_or(0) + 1
    }

    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.ordinals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn insert_shared(&mut self, id: &str, ordinal: usize) {
        self.ordinals.insert(id.to_string(), ordinal);
    }

    fn insert_next(&mut self, id: &str) -> usize {
        let ordinal = self.next;
        self.ordinals.insert(id.to_string(), ordinal);
        self.next += 1;
        self.max = Some(ordinal);
        ordinal
    }
}

/// Ordinal slots of one shape family for one draw pass.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeIndices {
    Flat(IndexBucket),
    /// One bucket per x-scale key, plus the series -> key mapping used to find them.
    ByX {
        buckets: IndexMap<String, IndexBucket>,
        x_of: AHashMap<String, String>,
    },
}

impl ShapeIndices {
    /// Assign ordinals to `series` (already filtered to visible members of one family),
    /// in the order given. Grouped series reuse the ordinal of the first group member
    /// that already has one.
    pub fn build<'s>(series: impl IntoIterator<Item = &'s Series>, config: &ShapeConfig) -> Self {
        let mut indices = if config.has_xs() {
            let mut buckets = IndexMap::new();
            for key in config.data_xs.values() {
                buckets.entry(key.clone()).or_insert_with(IndexBucket::default);
            }
            let x_of = config.data_xs.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            ShapeIndices::ByX { buckets, x_of }
        } else {
            ShapeIndices::Flat(IndexBucket::default())
        };

        for s in series {
            let bucket = indices.bucket_mut(&s.id);
            let mut shared = None;

            for group in config.data_groups.iter().filter(|g| g.contains(&s.id)) {
                if let Some(ordinal) = group.iter().find_map(|member| bucket.get(member)) {
                    shared = Some(ordinal);
                }
            }

            match shared {
                Some(ordinal) => bucket.insert_shared(&s.id, ordinal),
                None if !bucket.contains(&s.id) => {
                    bucket.insert_next(&s.id);
                }
                None => {}
            }
        }

        tracing::trace!(buckets = indices.bucket_count(), max = indices.max(), "shape indices built");
        indices
    }

    fn bucket_mut(&mut self, id: &str) -> &mut IndexBucket {
        match self {
            ShapeIndices::Flat(b) => b,
            ShapeIndices::ByX { buckets, x_of } => {
                let key = x_of.get(id).map(String::as_str).unwrap_or("");
                buckets.entry(key.to_string()).or_default()
            }
        }
    }

    /// The bucket that holds `id`'s ordinal. Pure lookup.
    pub fn get(&self, id: &str) -> Option<&IndexBucket> {
        match self {
            ShapeIndices::Flat(b) => Some(b),
            ShapeIndices::ByX { buckets, x_of } => {
                buckets.get(x_of.get(id).map(String::as_str).unwrap_or(""))
            }
        }
    }

    /// Ordinal of `id`, defaulting to 0.
    pub fn ordinal(&self, id: &str) -> usize {
        self.get(id).and_then(|b| b.get(id)).unwrap_or(0)
    }

    /// Single-x: the bucket's max. Multi-x: the sum of every bucket's max.
    pub fn max(&self) -> usize {
        match self {
            ShapeIndices::Flat(b) => b.max.unwrap_or(0),
            ShapeIndices::ByX { buckets, .. } => buckets.values().map(|b| b.max.unwrap_or(0)).sum(),
        }
    }

    pub fn bucket_count(&self) -> usize {
        match self {
            ShapeIndices::Flat(_) => 1,
            ShapeIndices::ByX { buckets, .. } => buckets.len(),
        }
    }
}
