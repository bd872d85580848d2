use crate::commit::ParsedMessage;
use crate::config::{AccumulateMode, CategoryOrder};

/// Category name and its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub category: String,
    pub entries: Vec<String>,
}

/// Ordered category -> entries mapping.
///
/// Buckets keep the order in which their category was first recorded, and
/// entries keep scan order within a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBuckets {
    buckets: Vec<Bucket>,
    mode: AccumulateMode,
}

impl CategoryBuckets {
    pub fn new(mode: AccumulateMode) -> Self {
        CategoryBuckets {
            buckets: Vec::new(),
            mode,
        }
    }

    /// Adds one entry under `category`.
    ///
    /// In [`AccumulateMode::Overwrite`] the entry replaces whatever the
    /// category held; the category keeps its original position.
    pub fn push(&mut self, category: &str, entry: String) {
        let index = match self.buckets.iter().position(|b| b.category == category) {
            Some(index) => index,
            None => {
                self.buckets.push(Bucket {
                    category: category.to_string(),
                    entries: Vec::new(),
                });
                self.buckets.len() - 1
            }
        };

        let entries = &mut self.buckets[index].entries;
        if self.mode == AccumulateMode::Overwrite {
            entries.clear();
        }
        entries.push(entry);
    }

    /// Records every accepted segment of a parsed message.
    pub fn record(&mut self, parsed: &ParsedMessage) {
        for segment in &parsed.entries {
            self.push(&segment.category, parsed.entry_text(segment));
        }
    }

    pub fn entries(&self, category: &str) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.entries.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.category.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Reorders buckets for output. Entry order inside a bucket is untouched.
    pub fn sort(&mut self, order: CategoryOrder) {
        match order {
            CategoryOrder::FirstSeen => {}
            CategoryOrder::Alphabetical => self.buckets.sort_by(|a, b| a.category.cmp(&b.category)),
        }
    }
}
