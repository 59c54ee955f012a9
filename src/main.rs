use std::env;
use std::process;

use clap::{App, Arg};
use log::debug;

use robot_search::config::Method;
use robot_search::{LoadBoard, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("robot-search")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .possible_values(&["bfs", "greedy", "astar"])
                .default_value("bfs")
                .help("order in which states are explored"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print status while searching"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let method: Method = matches
        .value_of("method")
        .unwrap_or("bfs")
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
    let print_status = !matches.is_present("quiet");
    let path = matches.value_of("file").unwrap_or_else(|| {
        eprintln!("No board file given");
        process::exit(1);
    });

    let board = path.load_board().unwrap_or_else(|err| {
        let current_dir = env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        eprintln!("Can't load board {} in {}: {}", path, current_dir, err);
        process::exit(1);
    });
    debug!("Loaded {}x{} board", board.rows(), board.cols());

    println!("Solving {} using {}...", path, method);
    let solution = board.solve(method, print_status).unwrap_or_else(|err| {
        eprintln!("Failed to solve: {}", err);
        process::exit(1);
    });
    println!("{}", solution.stats);

    match solution.path {
        Some(ref path) => {
            println!("Found solution:");
            println!("{}", board.format_with_path(path));
            for pos in path {
                println!("{}", pos);
            }
            println!("Steps: {}", path.len() - 1);
        }
        None => println!("No solution"),
    }
}
