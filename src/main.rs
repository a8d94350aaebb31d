use std::error::Error;
use std::process;
use std::time::{Duration, Instant};

use clap::{App, Arg, ArgMatches};
use log::{debug, info};
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use fifteen_solver::config::Method;
use fifteen_solver::parser::ParserErr;
use fifteen_solver::puzzle::Puzzle;
use fifteen_solver::solver::{SolverErr, SolverOk};
use fifteen_solver::{load_stdin, LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("fifteen-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves the 4x4 sliding puzzle")
        .arg(
            Arg::with_name("strategy")
                .required_unless("all")
                .help("DFS, BFS, IDFS, A*-misplaced, A*-Manhattan, Greedy-misplaced or Greedy-Manhattan"),
        )
        .arg(
            Arg::with_name("input")
                .help("file with the start and goal boards, standard input if missing"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics by depth"),
        )
        .arg(
            Arg::with_name("all")
                .short("a")
                .long("all")
                .help("compare all strategies on the puzzle"),
        )
        .arg(
            Arg::with_name("exclude")
                .short("x")
                .long("exclude")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .requires("all")
                .help("strategy to leave out of the comparison"),
        )
        .get_matches();

    let all = matches.is_present("all");

    // with --all the only positional argument is the input
    let (strategy, input) = if all {
        (None, matches.value_of("input").or(matches.value_of("strategy")))
    } else {
        (matches.value_of("strategy"), matches.value_of("input"))
    };

    let methods = match parse_methods(&matches, strategy, all) {
        Some(methods) => methods,
        None => {
            println!("Invalid Input");
            return;
        }
    };

    let puzzle = load(input).unwrap_or_else(|err| {
        match err.downcast_ref::<ParserErr>() {
            Some(err) => eprintln!("Invalid puzzle: {}", err),
            None => eprintln!("Can't read {}: {}", input.unwrap_or("stdin"), err),
        }
        process::exit(1);
    });
    debug!("Loaded puzzle: {:?}", puzzle);

    if all {
        compare(&puzzle, &methods);
    } else {
        solve(&puzzle, methods[0], matches.is_present("stats"));
    }
}

fn parse_methods(
    matches: &ArgMatches<'_>,
    strategy: Option<&str>,
    all: bool,
) -> Option<Vec<Method>> {
    if !all {
        return strategy?.parse::<Method>().ok().map(|method| vec![method]);
    }

    let mut excluded = Vec::new();
    if let Some(values) = matches.values_of("exclude") {
        for value in values {
            excluded.push(value.parse::<Method>().ok()?);
        }
    }
    Some(
        Method::ALL
            .iter()
            .cloned()
            .filter(|method| !excluded.contains(method))
            .collect(),
    )
}

fn load(input: Option<&str>) -> Result<Puzzle, Box<dyn Error>> {
    match input {
        Some(path) => path.load_puzzle(),
        None => load_stdin(),
    }
}

fn timed_solve(puzzle: &Puzzle, method: Method) -> (Result<SolverOk, SolverErr>, Duration) {
    let started = Instant::now();
    let result = puzzle.solve(method);
    let elapsed = started.elapsed();
    info!(
        "{} finished in {} ms",
        method,
        (elapsed.as_millis() as u64).separated_string()
    );
    (result, elapsed)
}

fn solve(puzzle: &Puzzle, method: Method, print_stats: bool) {
    let (result, elapsed) = timed_solve(puzzle, method);
    let solver_ok = match result {
        Ok(solver_ok) => solver_ok,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    match solver_ok.solution {
        Some(ref solution) => {
            print!("{}", puzzle.format_solution(solution));
            println!("Steps: {}", solution.steps());
        }
        None => println!("No solution"),
    }
    println!("Max nodes stored: {}", solver_ok.stats.max_frontier());
    if print_stats {
        println!();
        println!("{}", solver_ok.stats);
    }
    println!("Execution time: {:.6} seconds", elapsed.as_secs_f64());
}

fn compare(puzzle: &Puzzle, methods: &[Method]) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Strategy"),
        Cell::new("Steps"),
        Cell::new("Max frontier"),
        Cell::new("Expanded"),
        Cell::new("Time (ms)"),
    ]));

    for &method in methods {
        let (result, elapsed) = timed_solve(puzzle, method);
        let solver_ok = match result {
            Ok(solver_ok) => solver_ok,
            Err(err) => {
                // same parity test for every method, no point trying the rest
                println!("{}", err);
                return;
            }
        };

        let steps = match solver_ok.solution {
            Some(ref solution) => solution.steps().to_string(),
            None => "-".to_owned(),
        };
        let stats = &solver_ok.stats;
        table.add_row(Row::new(vec![
            Cell::new(&method.to_string()),
            Cell::new(&steps),
            Cell::new(&(stats.max_frontier() as u64).separated_string()),
            Cell::new(&stats.total_expanded().separated_string()),
            Cell::new(&(elapsed.as_millis() as u64).separated_string()),
        ]));
    }

    table.printstd();
}
