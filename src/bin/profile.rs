use std::time::{Duration, Instant};

use labyrinth::{generators::generate_maze, solvers::solve};

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);
    let (width, height) = (u8::MAX as u16, u8::MAX as u16);

    let mut generate_total = Duration::ZERO;
    let mut solve_total = Duration::ZERO;
    let mut steps_total = 0usize;

    for _ in 0..num_iters {
        let start = Instant::now();
        let maze = generate_maze(width, height, None).map_err(std::io::Error::other)?;
        generate_total += start.elapsed();

        let start = Instant::now();
        let solution = solve(&maze).map_err(std::io::Error::other)?;
        solve_total += start.elapsed();
        steps_total += solution.len();
    }

    let iters = num_iters.max(1) as u32;
    println!("{num_iters} runs on {width}x{height} mazes");
    println!("  generate: {:?} avg", generate_total / iters);
    println!("  solve:    {:?} avg", solve_total / iters);
    println!("  path:     {} cells avg", steps_total / num_iters.max(1));
    Ok(())
}
