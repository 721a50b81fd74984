use as_sssp::render::{render_matrix, render_topology};
use as_sssp::{Session, SessionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(SessionConfig {
        seed: Some(400),
        ..SessionConfig::default()
    });
    session.generate(8)?;

    let mut out = std::io::stdout();
    render_topology(Some(session.graph()?), &mut out)?;
    println!();

    println!("Shortest distances between all nodes:");
    render_matrix(&session.distance_matrix()?, &mut out)?;

    let route = session.route(0, 7)?;
    match (route.hops, route.distance) {
        (Some(hops), Some(distance)) => println!("0 -> 7 via {hops:?}, distance {distance}"),
        _ => println!("0 -> 7 unreachable"),
    }
    Ok(())
}
