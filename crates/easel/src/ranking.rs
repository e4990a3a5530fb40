// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A generic labelled (x, y) pair: a time-series sample, a bar, a table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeriesPoint {
    pub label: String,
    pub value: f64,
}

impl LabeledSeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A value-sorted, optionally truncated series.
pub type RankedSeries = Vec<LabeledSeriesPoint>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Stable-sorts a series by value and truncates it to `limit` entries.
///
/// Ties keep their input order, so repeated calls over identical input are
/// deterministic. Non-finite values compare as equal to everything and stay
/// where stability puts them.
pub fn rank(
    points: &[LabeledSeriesPoint],
    order: SortOrder,
    limit: Option<usize>,
) -> RankedSeries {
    let mut ranked = points.to_vec();
    ranked.sort_by(|a, b| {
        let cmp = a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(series: &RankedSeries) -> Vec<&str> {
        series.iter().map(|p| p.label.as_str()).collect()
    }

    #[test]
    fn descending_with_limit_keeps_tie_order() {
        let points = vec![
            LabeledSeriesPoint::new("A", 5.0),
            LabeledSeriesPoint::new("B", 3.0),
            LabeledSeriesPoint::new("C", 5.0),
        ];
        let ranked = rank(&points, SortOrder::Descending, Some(2));
        assert_eq!(labels(&ranked), vec!["A", "C"]);
    }

    #[test]
    fn ascending_orders_products_for_bar_display() {
        let points = vec![
            LabeledSeriesPoint::new("Product A", 12.0),
            LabeledSeriesPoint::new("Product B", 37.0),
            LabeledSeriesPoint::new("Product C", 25.0),
            LabeledSeriesPoint::new("Product D", 20.0),
            LabeledSeriesPoint::new("Product E", 22.0),
        ];
        let ranked = rank(&points, SortOrder::Ascending, None);
        assert_eq!(
            labels(&ranked),
            vec!["Product A", "Product D", "Product E", "Product C", "Product B"]
        );
    }

    #[test]
    fn limit_larger_than_input_is_a_noop() {
        let points = vec![LabeledSeriesPoint::new("only", 1.0)];
        let ranked = rank(&points, SortOrder::Descending, Some(10));
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn zero_limit_empties_the_series() {
        let points = vec![LabeledSeriesPoint::new("only", 1.0)];
        assert!(rank(&points, SortOrder::Ascending, Some(0)).is_empty());
    }

    #[test]
    fn repeated_ranking_is_deterministic() {
        let points = vec![
            LabeledSeriesPoint::new("x", 2.0),
            LabeledSeriesPoint::new("y", 2.0),
            LabeledSeriesPoint::new("z", 1.0),
        ];
        let first = rank(&points, SortOrder::Descending, None);
        let second = rank(&points, SortOrder::Descending, None);
        assert_eq!(first, second);
        assert_eq!(labels(&first), vec!["x", "y", "z"]);
    }
}
