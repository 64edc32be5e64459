use anyhow::Result;
use itertools::Itertools;
use ndarray::array;
use pairwise::distances;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("info".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Example arrays of 3D points
    let points1 = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
    let points2 = array![[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]];

    tracing::info!("computing distances for {} point pairs", points1.nrows());
    let dists = distances(points1.view(), points2.view())?;

    println!("Distances between points: [{}]", dists.iter().format(" "));

    Ok(())
}
