use domset::{NeighborMap, Point, Solver, SolverConfig};
use plotters::prelude::*;

const SIDE: i64 = 100;
const THRESHOLD: f64 = 12.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "domset=info".into()),
        )
        .init();

    let mut solver = Solver::new(SolverConfig::new(THRESHOLD))?;
    solver.random_points(400, SIDE, SIDE)?;

    let start = std::time::Instant::now();
    let set = solver.solve();
    println!(
        "{} points dominated by {} in {:.1?}",
        solver.count_points(),
        set.len(),
        start.elapsed()
    );

    draw("dominating_set.svg", solver.points(), &set)?;
    println!("Wrote dominating_set.svg");
    Ok(())
}

fn draw(filename: &str, points: &[Point], set: &[Point]) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(-5.0..(SIDE as f64 + 5.0), -5.0..(SIDE as f64 + 5.0))?;

    // Adjacency edges, faint.
    let map = NeighborMap::build(points, THRESHOLD);
    for (i, p) in points.iter().enumerate() {
        for &j in map.neighbors(i) {
            if j > i {
                let q = points[j];
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(p.x as f64, p.y as f64), (q.x as f64, q.y as f64)],
                    BLACK.mix(0.08),
                )))?;
            }
        }
    }

    // Coverage radius around each dominator. Plotters sizes circles in
    // pixels, so convert from data units.
    let radius_px = (THRESHOLD / 110.0 * 1024.0) as i32;
    for d in set {
        chart.draw_series(std::iter::once(Circle::new(
            (d.x as f64, d.y as f64),
            radius_px,
            BLUE.mix(0.12).filled(),
        )))?;
    }

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.x as f64, p.y as f64), 2, BLACK.filled())),
    )?;
    chart.draw_series(
        set.iter()
            .map(|p| Circle::new((p.x as f64, p.y as f64), 4, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}
