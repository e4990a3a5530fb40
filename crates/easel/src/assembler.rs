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

use crate::error::{ArgumentError, ArgumentResult, Result};
use crate::geo::{self, BoundingRange, GeoPoint, ProjectedPoint};
use crate::proportion::{self, PartValue, ProportionSlice};
use crate::ranking::{self, LabeledSeriesPoint, RankedSeries, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Headline figures shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiFigures {
    pub clients: u64,
    pub revenue: u64,
    pub orders: u64,
    pub average_order: u64,
}

/// Raw input pair for the goal-progress donut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub achieved: f64,
    pub goal: f64,
}

/// Projected markers plus the padded viewport that frames them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub markers: Vec<ProjectedPoint>,
    pub frame: BoundingRange,
}

/// Everything a rendering layer needs for one dashboard pass. Built fresh
/// per request and handed over whole; nothing here is shared or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardContext {
    pub kpis: KpiFigures,
    pub goal: Vec<ProportionSlice>,
    pub weekly: Vec<LabeledSeriesPoint>,
    pub products: RankedSeries,
    pub map: MapData,
    pub clients: RankedSeries,
}

/// Supplies the raw collections the assembler derives chart data from.
/// Implementations own where the data comes from; the assembler never
/// performs I/O itself.
pub trait DataSource {
    fn kpis(&self) -> KpiFigures;
    fn goal_progress(&self) -> GoalProgress;
    fn weekly_revenue(&self) -> Vec<LabeledSeriesPoint>;
    fn product_sales(&self) -> Vec<LabeledSeriesPoint>;
    fn client_orders(&self) -> Vec<LabeledSeriesPoint>;
    fn cities(&self) -> Vec<GeoPoint>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// Margin added to each side of the map's x extent, in projected meters.
    pub map_padding: f64,
    /// Truncation for the product bar chart; `None` keeps every product.
    pub product_limit: Option<usize>,
    /// Truncation for the client table; `None` keeps every client.
    pub client_limit: Option<usize>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            map_padding: 10_000.0,
            product_limit: Some(5),
            client_limit: Some(10),
        }
    }
}

impl AssemblyConfig {
    pub fn validate(&self) -> ArgumentResult<()> {
        if !self.map_padding.is_finite() || self.map_padding < 0.0 {
            return Err(ArgumentError::InvalidPadding {
                padding: self.map_padding,
            });
        }
        Ok(())
    }
}

/// The one component that knows which chart needs which derived fields.
/// Stateless beyond its configuration; every method is a pure transform over
/// the inputs it is handed.
#[derive(Debug, Clone, Default)]
pub struct ChartDataAssembler {
    config: AssemblyConfig,
}

impl ChartDataAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AssemblyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Goal-progress donut: two contiguous wedges, `Achieved` and the
    /// remainder up to `goal`. Slice values sum to `goal`.
    pub fn goal_donut(&self, achieved: f64, goal: f64) -> Result<Vec<ProportionSlice>> {
        if achieved < 0.0 || goal < 0.0 {
            return Err(ArgumentError::NegativeGoalFigure { achieved, goal }.into());
        }
        if achieved > goal {
            return Err(ArgumentError::AchievedExceedsGoal { achieved, goal }.into());
        }
        let parts = [
            PartValue::new("Achieved", achieved),
            PartValue::new("Rest", goal - achieved),
        ];
        Ok(proportion::split(&parts)?)
    }

    /// Chronological series pass through untouched; the renderer plots them
    /// in the order the source supplied.
    pub fn chronological_series(&self, points: &[LabeledSeriesPoint]) -> Vec<LabeledSeriesPoint> {
        points.to_vec()
    }

    /// Bar/table views over a ranked series.
    pub fn ranked_bar(
        &self,
        points: &[LabeledSeriesPoint],
        order: SortOrder,
        limit: Option<usize>,
    ) -> RankedSeries {
        ranking::rank(points, order, limit)
    }

    /// Top-K client table, highest order volume first.
    pub fn client_table(
        &self,
        points: &[LabeledSeriesPoint],
        limit: Option<usize>,
    ) -> RankedSeries {
        ranking::rank(points, SortOrder::Descending, limit)
    }

    /// City markers projected to Web Mercator, with the framing viewport.
    pub fn map_markers(&self, points: &[GeoPoint]) -> Result<MapData> {
        let markers = geo::project(points)?;
        let frame = geo::bounding_range(&markers, self.config.map_padding)?;
        Ok(MapData { markers, frame })
    }

    /// One full render pass: pulls every collection from the source and
    /// derives the render-ready records for all five widgets.
    pub fn assemble(&self, source: &dyn DataSource) -> Result<DashboardContext> {
        let progress = source.goal_progress();
        let goal = self.goal_donut(progress.achieved, progress.goal)?;
        let weekly = self.chronological_series(&source.weekly_revenue());
        let products = self.ranked_bar(
            &source.product_sales(),
            SortOrder::Ascending,
            self.config.product_limit,
        );
        let map = self.map_markers(&source.cities())?;
        let clients = self.client_table(&source.client_orders(), self.config.client_limit);
        let context = DashboardContext {
            kpis: source.kpis(),
            goal,
            weekly,
            products,
            map,
            clients,
        };
        debug!(
            weekly = context.weekly.len(),
            products = context.products.len(),
            markers = context.map.markers.len(),
            clients = context.clients.len(),
            "Dashboard context assembled"
        );
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ChartDataError, DomainError};
    use std::f64::consts::TAU;

    struct FixtureSource;

    impl DataSource for FixtureSource {
        fn kpis(&self) -> KpiFigures {
            KpiFigures {
                clients: 2070,
                revenue: 1_305_805,
                orders: 2095,
                average_order: 3380,
            }
        }
        fn goal_progress(&self) -> GoalProgress {
            GoalProgress {
                achieved: 1_620_500.0,
                goal: 1_945_000.0,
            }
        }
        fn weekly_revenue(&self) -> Vec<LabeledSeriesPoint> {
            vec![
                LabeledSeriesPoint::new("Mon", 1500.0),
                LabeledSeriesPoint::new("Tue", 1221.0),
                LabeledSeriesPoint::new("Wed", 1490.0),
            ]
        }
        fn product_sales(&self) -> Vec<LabeledSeriesPoint> {
            vec![
                LabeledSeriesPoint::new("Product A", 12.0),
                LabeledSeriesPoint::new("Product B", 37.0),
            ]
        }
        fn client_orders(&self) -> Vec<LabeledSeriesPoint> {
            vec![
                LabeledSeriesPoint::new("Sam Smith", 1200.0),
                LabeledSeriesPoint::new("Donnie Yen", 6200.0),
            ]
        }
        fn cities(&self) -> Vec<GeoPoint> {
            vec![
                GeoPoint::new("Cotonou", 6.366667, 2.433333),
                GeoPoint::new("Porto-Novo", 6.497222, 2.605),
            ]
        }
    }

    #[test]
    fn goal_donut_slices_sum_to_goal() {
        let assembler = ChartDataAssembler::new();
        let slices = assembler.goal_donut(1_620_500.0, 1_945_000.0).unwrap();
        assert_eq!(slices.len(), 2);
        let total: f64 = slices.iter().map(|s| s.value).sum();
        assert!((total - 1_945_000.0).abs() < 1e-6);
        assert_eq!(slices[0].percent, "83.32%");
        assert!((slices[1].end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn goal_donut_rejects_overshoot() {
        let assembler = ChartDataAssembler::new();
        let err = assembler.goal_donut(2_000_000.0, 1_945_000.0).unwrap_err();
        assert!(matches!(err, ChartDataError::InvalidArgument(_)));
        assert_eq!(err.category(), "Argument");
    }

    #[test]
    fn goal_donut_rejects_negative_figures() {
        let assembler = ChartDataAssembler::new();
        let err = assembler.goal_donut(-1.0, 100.0).unwrap_err();
        assert!(matches!(
            err,
            ChartDataError::InvalidArgument(ArgumentError::NegativeGoalFigure { .. })
        ));
    }

    #[test]
    fn zero_goal_is_a_domain_failure() {
        // achieved == goal == 0 passes the argument checks but leaves the
        // splitter with a zero total
        let assembler = ChartDataAssembler::new();
        let err = assembler.goal_donut(0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ChartDataError::Domain(DomainError::NonPositiveTotal { .. })
        ));
    }

    #[test]
    fn fully_achieved_goal_still_splits() {
        let assembler = ChartDataAssembler::new();
        let slices = assembler.goal_donut(500.0, 500.0).unwrap();
        assert_eq!(slices[0].percent, "100.00%");
        assert_eq!(slices[1].percent, "0.00%");
    }

    #[test]
    fn chronological_series_is_untouched() {
        let assembler = ChartDataAssembler::new();
        let source = FixtureSource;
        let weekly = assembler.chronological_series(&source.weekly_revenue());
        assert_eq!(weekly, source.weekly_revenue());
    }

    #[test]
    fn invalid_padding_is_rejected_at_construction() {
        let config = AssemblyConfig {
            map_padding: -5.0,
            ..Default::default()
        };
        let err = ChartDataAssembler::with_config(config).unwrap_err();
        assert!(matches!(
            err,
            ChartDataError::InvalidArgument(ArgumentError::InvalidPadding { .. })
        ));
    }

    #[test]
    fn assemble_builds_every_widget() {
        let assembler = ChartDataAssembler::new();
        let context = assembler.assemble(&FixtureSource).unwrap();
        assert_eq!(context.kpis.clients, 2070);
        assert_eq!(context.goal.len(), 2);
        assert_eq!(context.weekly.len(), 3);
        assert_eq!(context.products[0].label, "Product A");
        assert_eq!(context.map.markers.len(), 2);
        assert_eq!(context.clients[0].label, "Donnie Yen");
    }

    #[test]
    fn assemble_is_deterministic() {
        let assembler = ChartDataAssembler::new();
        let a = assembler.assemble(&FixtureSource).unwrap();
        let b = assembler.assemble(&FixtureSource).unwrap();
        assert_eq!(a, b);
    }
}
