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

use anyhow::Result;
use clap::{Arg, Command};
use easel::{
    AssemblyConfig, ChartDataAssembler, DataSource, GeoPoint, GoalProgress, KpiFigures,
    LabeledSeriesPoint,
};
use tracing::{info, Level};

/// The hard-coded sales dataset of the original dashboard, behind the
/// data-access seam the assembler expects. A real deployment would back
/// this trait with a query layer instead.
struct SampleSalesData;

impl DataSource for SampleSalesData {
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
        [
            ("Mon", 1500.0),
            ("Tue", 1221.0),
            ("Wed", 1490.0),
            ("Thu", 1750.0),
            ("Fri", 1620.0),
            ("Sat", 1600.0),
            ("Sun", 1510.0),
        ]
        .into_iter()
        .map(|(d, v)| LabeledSeriesPoint::new(d, v))
        .collect()
    }

    fn product_sales(&self) -> Vec<LabeledSeriesPoint> {
        [
            ("Product A", 12.0),
            ("Product B", 37.0),
            ("Product C", 25.0),
            ("Product D", 20.0),
            ("Product E", 22.0),
        ]
        .into_iter()
        .map(|(p, v)| LabeledSeriesPoint::new(p, v))
        .collect()
    }

    fn client_orders(&self) -> Vec<LabeledSeriesPoint> {
        [
            ("Sam Smith", 1200.0),
            ("Sarah Guido", 3750.0),
            ("Bruce Lee", 2500.0),
            ("Elon Musk", 2080.0),
            ("Claire Mathieu", 2275.0),
            ("Gérard Berry", 750.0),
            ("Donald Trump", 2000.0),
            ("Donnie Yen", 6200.0),
            ("La Fouine", 4500.0),
            ("Charles De Gaule", 4850.0),
        ]
        .into_iter()
        .map(|(c, v)| LabeledSeriesPoint::new(c, v))
        .collect()
    }

    fn cities(&self) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new("Cotonou", 6.366667, 2.433333),
            GeoPoint::new("Porto-Novo", 6.497222, 2.605),
            GeoPoint::new("Ouidah", 6.366667, 2.083333),
        ]
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_env_filter("info")
        .init();

    let matches = Command::new("easel-dashboard-demo")
        .about("Assembles the sample sales dashboard and prints the render-ready context as JSON")
        .arg(
            Arg::new("padding")
                .long("padding")
                .value_name("METERS")
                .help("Map viewport margin in projected meters")
                .value_parser(clap::value_parser!(f64))
                .default_value("10000"),
        )
        .arg(
            Arg::new("top-products")
                .long("top-products")
                .value_name("N")
                .help("Number of products to keep in the bar chart")
                .value_parser(clap::value_parser!(usize))
                .default_value("5"),
        )
        .arg(
            Arg::new("top-clients")
                .long("top-clients")
                .value_name("N")
                .help("Number of clients to keep in the table")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .get_matches();

    let config = AssemblyConfig {
        map_padding: *matches.get_one::<f64>("padding").expect("has default"),
        product_limit: matches.get_one::<usize>("top-products").copied(),
        client_limit: matches.get_one::<usize>("top-clients").copied(),
    };

    let assembler = ChartDataAssembler::with_config(config)?;
    info!("Assembling sample dashboard context");
    let context = assembler.assemble(&SampleSalesData)?;

    println!("{}", serde_json::to_string_pretty(&context)?);
    Ok(())
}
