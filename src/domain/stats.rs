// src/domain/stats.rs

use super::listing::ListingRecord;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_price: f64,
    pub median_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Mean price for one group (a location or a BHK count).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAverage<K> {
    pub key: K,
    pub mean_price: f64,
    pub count: usize,
}

pub fn summary(listings: &[ListingRecord]) -> Option<Summary> {
    if listings.is_empty() {
        return None;
    }

    let mut prices: Vec<f64> = listings.iter().map(|l| l.price).collect();
    prices.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = prices.len();
    let median_price = if n % 2 == 0 {
        (prices[n / 2 - 1] + prices[n / 2]) / 2.0
    } else {
        prices[n / 2]
    };

    Some(Summary {
        count: n,
        mean_price: prices.iter().sum::<f64>() / n as f64,
        median_price,
    })
}

/// Equal-width histogram of prices. The last bin is closed on the right.
pub fn price_histogram(listings: &[ListingRecord], bins: usize) -> Vec<PriceBin> {
    if listings.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (min, max) = listings
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), l| {
            (lo.min(l.price), hi.max(l.price))
        });

    // All prices equal: one bin holds everything.
    if max <= min {
        return vec![PriceBin {
            lower: min,
            upper: max,
            count: listings.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for l in listings {
        let idx = (((l.price - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| PriceBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

/// Locations with the highest mean price, most expensive first.
pub fn location_averages(listings: &[ListingRecord], top_n: usize) -> Vec<GroupAverage<String>> {
    let mut groups: HashMap<&str, (f64, usize)> = HashMap::new();
    for l in listings {
        let entry = groups.entry(l.location.as_str()).or_insert((0.0, 0));
        entry.0 += l.price;
        entry.1 += 1;
    }

    let mut averages: Vec<GroupAverage<String>> = groups
        .into_iter()
        .map(|(key, (total, count))| GroupAverage {
            key: key.to_string(),
            mean_price: total / count as f64,
            count,
        })
        .collect();

    averages.sort_by(|a, b| {
        b.mean_price
            .partial_cmp(&a.mean_price)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });
    averages.truncate(top_n);
    averages
}

/// Mean price per BHK, ascending BHK.
pub fn bhk_averages(listings: &[ListingRecord]) -> Vec<GroupAverage<u32>> {
    let mut groups: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for l in listings {
        let entry = groups.entry(l.bhk).or_insert((0.0, 0));
        entry.0 += l.price;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(key, (total, count))| GroupAverage {
            key,
            mean_price: total / count as f64,
            count,
        })
        .collect()
}

/// `(area, price)` points, evenly sampled down to at most `max_points`.
pub fn sqft_price_points(listings: &[ListingRecord], max_points: usize) -> Vec<(f64, f64)> {
    if max_points == 0 {
        return Vec::new();
    }

    let step = listings.len().div_ceil(max_points).max(1);
    listings
        .iter()
        .step_by(step)
        .map(|l| (l.area, l.price))
        .collect()
}
