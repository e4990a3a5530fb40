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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartDataError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
}

/// Mathematically undefined input. The operation has no meaningful result,
/// regardless of who supplied the data.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("latitude {latitude} for '{label}' is outside the projectable range (-90, 90)")]
    LatitudeOutOfRange { label: String, latitude: f64 },
    #[error("longitude {longitude} for '{label}' is outside [-180, 180]")]
    LongitudeOutOfRange { label: String, longitude: f64 },
    #[error("coordinate for '{label}' is not finite")]
    NonFiniteCoordinate { label: String },
    #[error("cannot frame an empty point set")]
    EmptyPointSet,
    #[error("proportion total must be positive, got {total}")]
    NonPositiveTotal { total: f64 },
    #[error("part '{label}' has negative value {value}")]
    NegativePart { label: String, value: f64 },
}

/// Caller contract violation: the request itself is malformed.
#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("achieved {achieved} exceeds goal {goal}")]
    AchievedExceedsGoal { achieved: f64, goal: f64 },
    #[error("goal figures must be non-negative: achieved {achieved}, goal {goal}")]
    NegativeGoalFigure { achieved: f64, goal: f64 },
    #[error("map padding must be finite and non-negative, got {padding}")]
    InvalidPadding { padding: f64 },
}

pub type Result<T> = std::result::Result<T, ChartDataError>;
pub type DomainResult<T> = std::result::Result<T, DomainError>;
pub type ArgumentResult<T> = std::result::Result<T, ArgumentError>;

impl ChartDataError {
    pub fn category(&self) -> &'static str {
        match self {
            ChartDataError::Domain(_) => "Domain",
            ChartDataError::InvalidArgument(_) => "Argument",
        }
    }
}
