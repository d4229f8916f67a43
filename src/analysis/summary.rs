use std::collections::BTreeMap;

use crate::domain::listing::Listing;

/// Mean over the filtered view plus its distance from the full-dataset
/// mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub mean: f64,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Averages {
    pub price: Metric,
    pub minimum_nights: Metric,
    /// `None` when no filtered listing carries a rating.
    pub review_scores_rating: Option<Metric>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub filtered_count: usize,
    pub total_count: usize,
    /// `None` when the filtered view is empty; the page shows "no data"
    /// instead of dividing by zero.
    pub averages: Option<Averages>,
}

pub fn summarize(filtered: &[&Listing], full: &[Listing]) -> Summary {
    let averages = match (
        metric(filtered, full, |l| Some(l.price)),
        metric(filtered, full, |l| Some(f64::from(l.minimum_nights))),
    ) {
        (Some(price), Some(minimum_nights)) => Some(Averages {
            price,
            minimum_nights,
            review_scores_rating: metric(filtered, full, |l| l.review_scores_rating),
        }),
        _ => None,
    };

    Summary {
        filtered_count: filtered.len(),
        total_count: full.len(),
        averages,
    }
}

/// Mean of `value` per distinct `key`, e.g. the average price of superhost
/// vs non-superhost listings. Keys are the raw field values; presentation
/// labels live in the templates.
pub fn group_mean<K, KF, VF>(rows: &[&Listing], key: KF, value: VF) -> BTreeMap<K, f64>
where
    K: Ord,
    KF: Fn(&Listing) -> K,
    VF: Fn(&Listing) -> f64,
{
    let mut sums: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = sums.entry(key(row)).or_insert((0.0, 0));
        entry.0 += value(row);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(k, (sum, count))| (k, sum / count as f64))
        .collect()
}

fn metric<F>(filtered: &[&Listing], full: &[Listing], field: F) -> Option<Metric>
where
    F: Fn(&Listing) -> Option<f64>,
{
    let filtered_mean = mean(filtered.iter().copied(), &field)?;
    let full_mean = mean(full.iter(), &field)?;
    Some(Metric {
        mean: filtered_mean,
        delta: filtered_mean - full_mean,
    })
}

fn mean<'a, I, F>(rows: I, field: &F) -> Option<f64>
where
    I: IntoIterator<Item = &'a Listing>,
    F: Fn(&Listing) -> Option<f64>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for row in rows {
        if let Some(value) = field(row) {
            sum += value;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}
