use std::io::Read;

use flexi_logger::Logger;
use tree_reroot::{
    input::parse_tree,
    stats::{diameter, eccentricities, sum_of_distances, vertices_on_diameter},
};

fn print_row(name: &str, values: &[i64]) {
    let row: Vec<String> = values.iter().map(|x| x.to_string()).collect();
    println!("{name}: {}", row.join(" "));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .start()?;

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    let tree = parse_tree(&text)?;
    let rooted = tree.rooted();
    log::info!("read a tree on {} nodes", tree.node_count());

    print_row("sum of distances", &sum_of_distances(&rooted));
    print_row("eccentricity", &eccentricities(&rooted));
    let d = diameter(&rooted);
    println!("diameter: {} ({} pairs)", d.length, d.count);
    println!("nodes on a diameter: {}", vertices_on_diameter(&rooted));
    Ok(())
}
