use std::cmp::Ordering;

use crate::dataset::Dataset;
use crate::order::Order;
use crate::record::CensusRecord;
use crate::sort_key::SortKey;

/// Sort census records by one field
///
/// The sort is stable: records with equal keys keep the order in which the dataset first
/// saw their states. The dataset is never modified, every call returns new records.
///
/// # Examples
/// ```
/// use census_analyser::census_sort::CensusSort;
/// use census_analyser::dataset::Dataset;
/// use census_analyser::order::Order;
/// use census_analyser::sort_key::SortKey;
///
/// fn smallest_first(dataset: &Dataset) -> Vec<String> {
///     let mut sort = CensusSort::new(SortKey::Population);
///     // population sorts from the largest by default
///     sort.with_order(Order::Asc);
///     sort.sort(dataset).into_iter().map(|r| r.state).collect()
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CensusSort {
    key: SortKey,
    order: Order,
}

impl CensusSort {
    /// Create a sort by `key` in the key's natural order, see [SortKey::natural_order].
    pub fn new(key: SortKey) -> CensusSort {
        CensusSort {
            key,
            order: key.natural_order(),
        }
    }

    /// Set [Order]
    pub fn with_order(&mut self, order: Order) {
        self.order = order
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Sort the records of `dataset`.
    pub fn sort(&self, dataset: &Dataset) -> Vec<CensusRecord> {
        let mut records = dataset.values();
        self.sort_records(&mut records);
        log::debug!("Sorted {} records by {}, order: {:?}", records.len(), self.key, self.order);
        records
    }

    /// Sort `records` in place.
    pub fn sort_records(&self, records: &mut [CensusRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    /// Check if `records` are already sorted.
    pub fn check(&self, records: &[CensusRecord]) -> bool {
        records.windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }

    fn compare(&self, a: &CensusRecord, b: &CensusRecord) -> Ordering {
        let ordering = self.key.key(a).cmp(&self.key.key(b));
        match self.order {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    }
}
