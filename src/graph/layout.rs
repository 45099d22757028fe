//! Deterministic force-directed placement for the interest graph.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{InterestGraph, TitleId};

/// Fruchterman-Reingold placement in the unit square.
///
/// Purely presentational: coordinates carry no meaning beyond visual
/// clustering. The initial scatter comes from a `StdRng` seeded by the
/// caller, so identical input and seed give identical coordinates.
pub fn layout(
    graph: &InterestGraph,
    seed: u64,
    iterations: usize,
) -> BTreeMap<TitleId, (f64, f64)> {
    let titles: Vec<TitleId> = graph.titles().into_iter().cloned().collect();
    let n = titles.len();
    if n == 0 {
        return BTreeMap::new();
    }

    let index_of: BTreeMap<&TitleId, usize> = titles
        .iter()
        .enumerate()
        .map(|(idx, title)| (title, idx))
        .collect();
    let edges: Vec<(usize, usize)> = graph
        .edges
        .iter()
        .map(|edge| (index_of[&edge.title_a], index_of[&edge.title_b]))
        .collect();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    // Optimal pairwise distance for a unit-area canvas.
    let k = (1.0 / n as f64).sqrt();

    for iteration in 0..iterations {
        let mut displacement = vec![(0.0f64, 0.0f64); n];

        // Repulsion between every node pair.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = positions[i].0 - positions[j].0;
                let dy = positions[i].1 - positions[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = k * k / dist;
                let (ux, uy) = (dx / dist, dy / dist);
                displacement[i].0 += ux * force;
                displacement[i].1 += uy * force;
                displacement[j].0 -= ux * force;
                displacement[j].1 -= uy * force;
            }
        }

        // Attraction along edges.
        for &(i, j) in &edges {
            let dx = positions[i].0 - positions[j].0;
            let dy = positions[i].1 - positions[j].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let force = dist * dist / k;
            let (ux, uy) = (dx / dist, dy / dist);
            displacement[i].0 -= ux * force;
            displacement[i].1 -= uy * force;
            displacement[j].0 += ux * force;
            displacement[j].1 += uy * force;
        }

        // Cooling: displacement is capped by a temperature that decays
        // linearly to zero.
        let temperature = 0.1 * (1.0 - iteration as f64 / iterations as f64);
        for i in 0..n {
            let (dx, dy) = displacement[i];
            let len = (dx * dx + dy * dy).sqrt();
            if len > 0.0 {
                let step = len.min(temperature);
                positions[i].0 = (positions[i].0 + dx / len * step).clamp(0.0, 1.0);
                positions[i].1 = (positions[i].1 + dy / len * step).clamp(0.0, 1.0);
            }
        }
    }

    titles.into_iter().zip(positions).collect()
}
