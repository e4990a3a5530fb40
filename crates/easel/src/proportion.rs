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

use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// One row of a whole-to-parts breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartValue {
    pub label: String,
    pub value: f64,
}

impl PartValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A wedge of a pie/donut chart. Angles are radians, cumulative across the
/// ordered slice set: slice `i` starts where slice `i-1` ends, the first
/// starts at 0 and the last ends at 2π. That contiguity is what lets a
/// renderer draw non-overlapping wedges straight from these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionSlice {
    pub label: String,
    pub value: f64,
    /// Share of the whole, rendered as e.g. `"83.32%"`. Rounding is
    /// round-half-to-even at two decimals.
    pub percent: String,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Converts part values into percentage strings and cumulative wedge angles.
///
/// Order preserving. Fails when the total is not positive or any part is
/// negative; either would make the wedge layout meaningless.
pub fn split(parts: &[PartValue]) -> DomainResult<Vec<ProportionSlice>> {
    if let Some(bad) = parts.iter().find(|p| p.value < 0.0) {
        return Err(DomainError::NegativePart {
            label: bad.label.clone(),
            value: bad.value,
        });
    }
    let total: f64 = parts.iter().map(|p| p.value).sum();
    if !(total > 0.0) {
        return Err(DomainError::NonPositiveTotal { total });
    }
    let mut cursor = 0.0_f64;
    let slices = parts
        .iter()
        .map(|part| {
            let fraction = part.value / total;
            let start_angle = cursor;
            cursor += fraction * TAU;
            ProportionSlice {
                label: part.label.clone(),
                value: part.value,
                percent: format!("{:.2}%", fraction * 100.0),
                start_angle,
                end_angle: cursor,
            }
        })
        .collect();
    Ok(slices)
}
