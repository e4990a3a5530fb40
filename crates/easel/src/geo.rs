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
use std::f64::consts::PI;

/// Web Mercator sphere radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// A labelled geographic coordinate in WGS84 decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            label: label.into(),
            latitude,
            longitude,
        }
    }
}

/// A projected map marker. The source latitude/longitude are retained because
/// hover tooltips display them alongside the planar position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub x: f64,
    pub y: f64,
}

/// Padded viewport extents in projected meters, ready for map framing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Projects WGS84 coordinates onto the spherical Web Mercator plane.
///
/// Order preserving, one output per input. Fails on any coordinate the
/// projection is undefined for: non-finite values, `|latitude| >= 90`
/// (the tangent argument degenerates at the poles), `|longitude| > 180`.
pub fn project(points: &[GeoPoint]) -> DomainResult<Vec<ProjectedPoint>> {
    points.iter().map(project_point).collect()
}

fn project_point(point: &GeoPoint) -> DomainResult<ProjectedPoint> {
    if !point.latitude.is_finite() || !point.longitude.is_finite() {
        return Err(DomainError::NonFiniteCoordinate {
            label: point.label.clone(),
        });
    }
    if point.latitude.abs() >= 90.0 {
        return Err(DomainError::LatitudeOutOfRange {
            label: point.label.clone(),
            latitude: point.latitude,
        });
    }
    if point.longitude.abs() > 180.0 {
        return Err(DomainError::LongitudeOutOfRange {
            label: point.label.clone(),
            longitude: point.longitude,
        });
    }
    let x = point.longitude * (EARTH_RADIUS_M * PI / 180.0);
    let y = ((90.0 + point.latitude) * PI / 360.0).tan().ln() * EARTH_RADIUS_M;
    Ok(ProjectedPoint {
        label: point.label.clone(),
        latitude: point.latitude,
        longitude: point.longitude,
        x,
        y,
    })
}

/// Viewport extents for a set of projected markers.
///
/// The x range is widened by `padding` meters on each side; the y range is
/// the raw min/max. Fails on an empty point set.
pub fn bounding_range(points: &[ProjectedPoint], padding: f64) -> DomainResult<BoundingRange> {
    let first = points.first().ok_or(DomainError::EmptyPointSet)?;
    let mut range = BoundingRange {
        x_min: first.x,
        x_max: first.x,
        y_min: first.y,
        y_max: first.y,
    };
    for p in &points[1..] {
        range.x_min = range.x_min.min(p.x);
        range.x_max = range.x_max.max(p.x);
        range.y_min = range.y_min.min(p.y);
        range.y_max = range.y_max.max(p.y);
    }
    range.x_min -= padding;
    range.x_max += padding;
    Ok(range)
}
