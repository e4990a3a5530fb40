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

//! Chart-data preparation: pure, stateless transforms that turn tabular
//! input into the exact numeric and string fields a rendering layer needs
//! for pie, bar, time-series, map and table widgets. The library performs
//! no I/O and holds no state; callers inject data through [`DataSource`]
//! and hand the assembled [`DashboardContext`] to their renderer.

pub mod assembler;
pub mod error;
pub mod geo;
pub mod proportion;
pub mod ranking;

pub use assembler::{
    AssemblyConfig, ChartDataAssembler, DashboardContext, DataSource, GoalProgress, KpiFigures,
    MapData,
};
pub use error::{ArgumentError, ChartDataError, DomainError, Result};
pub use geo::{bounding_range, project, BoundingRange, GeoPoint, ProjectedPoint, EARTH_RADIUS_M};
pub use proportion::{split, PartValue, ProportionSlice};
pub use ranking::{rank, LabeledSeriesPoint, RankedSeries, SortOrder};
