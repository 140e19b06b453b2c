//! Walks a closed polyline stored in a `CyclicList` and reports how each edge
//! meets a horizontal cut. Classifier decisions show up as TRACE/DEBUG events.
//!
//!   cargo run -p datatypes --example intersections

use anyhow::Result;
use datatypes::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::TRACE)
        .init();

    let square: CyclicList<Point2D> = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]
        .into_iter()
        .map(|(x, y)| Point2D::new(x, y))
        .collect();
    let cut = Segment2D::new(Point2D::new(-1.0, 1.0), Point2D::new(3.0, 1.0));

    for (a, b) in square.circular_pairs() {
        let edge = Segment2D::new(*a, *b);
        let hit = edge.intersection_with(&cut, GeomCfg::strict())?;
        tracing::info!(%edge, %hit, "edge vs cut");
    }

    let bottom = Segment2D::new(*square.get(0)?, *square.get(1)?);
    let along = Segment2D::new(Point2D::new(1.0, 0.0), Point2D::new(5.0, 0.0));
    tracing::info!(result = %bottom.intersection(&along), "collinear overlap");

    let v = *square.get(-2)? - *square.get(0)?;
    let p = v.to_polar();
    tracing::info!(%v, %p, degrees = p.theta_degrees(), "diagonal in polar form");
    Ok(())
}
