use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
struct Options {
    /// Path to the RTE file
    input: PathBuf,

    /// Fail if the checksum trailer does not match
    #[arg(long)]
    verify: bool,

    /// Re-encode the decoded route and write it to this path
    #[arg(long)]
    rewrite: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = Options::parse();

    let data = std::fs::read(&options.input)?;
    let waypoints = if options.verify {
        genesys_nav::rte::decode_file_checked(&data)?
    } else {
        genesys_nav::rte::decode_file(&data)?
    };

    println!("Route name: {}", genesys_nav::rte::route_name(&data)?);
    println!("Waypoints: {}", waypoints.len());
    match genesys_nav::rte::verify_checksum(&data) {
        Ok(()) => println!("Checksum: OK"),
        Err(e) => println!("Checksum: {}", e),
    }
    println!("Suggested file name: {}", genesys_nav::rte::route_filename(&waypoints));

    println!();
    for (i, waypoint) in waypoints.iter().enumerate() {
        println!(
            "  [{}] {:<6} {:>11.6} {:>11.6} {:?}",
            i, waypoint.ident, waypoint.latitude, waypoint.longitude, waypoint.description
        );
    }

    if let Some(path) = options.rewrite {
        let encoded = genesys_nav::rte::encode_file(&waypoints)?;
        std::fs::write(&path, encoded)?;
        println!();
        println!("Wrote {}", path.display());
    }

    Ok(())
}
