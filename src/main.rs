//! coin-change CLI
//!
//! Make change from the command line, greedily or with every minimal-coin
//! decomposition.
//!
//! # Usage
//!
//! ```bash
//! # Greedy change for several amounts
//! coin-change greedy --coins 1,2,5,10,25,50 --amounts 93,111,113
//!
//! # Every minimal-coin decomposition, as JSON
//! coin-change optimal --coins 1,3,4,6,10,25 --amounts 7,32 --format json
//!
//! # Greedy next to the optimum
//! coin-change compare --coins 1,3,4 --amounts 6
//!
//! # Run a batch file, or generate one
//! coin-change batch --input requests.json
//! coin-change generate --count 20 --seed 7 --output requests.json
//! ```
//!
//! Set `RUST_LOG=debug` to see per-computation summaries on stderr.

use coin_change::core::amount::Amount;
use coin_change::core::decomposition::Decomposition;
use coin_change::core::denomination::DenominationSet;
use coin_change::optimization::comparison::ChangeComparison;
use coin_change::optimization::enumeration::MinCoinEnumerator;
use coin_change::optimization::greedy::GreedyDecomposer;
use coin_change::simulation::random_cases::{generate_cases, CaseConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"coin-change — greedy and minimal-coin change making

USAGE:
    coin-change <COMMAND> [OPTIONS]

COMMANDS:
    greedy      Greedy decomposition (largest coin first)
    optimal     Every decomposition using the minimum number of coins
    compare     Greedy result next to the optimum
    batch       Run greedy and optimal over a JSON request file
    generate    Generate a random request file (for testing)
    demo        Run the built-in demonstration
    help        Show this message

OPTIONS (greedy, optimal, compare):
    --coins <LIST>      Comma-separated positive denominations
    --amounts <LIST>    Comma-separated non-negative amounts
    --format <FORMAT>   Output format: text (default) or json
    --limit <N>         (optimal) Print at most N solutions per amount

OPTIONS (batch):
    --input <FILE>      Path to JSON request file
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --count <N>         Number of requests (default: 10)
    --coins <N>         Denominations per request (default: 5)
    --max-coin <N>      Largest denomination (default: 50)
    --max-amount <N>    Largest amount (default: 200)
    --no-unit           Do not force a coin of value 1
    --seed <N>          Seed for reproducible output
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    coin-change greedy --coins 1,2,5,10,25,50 --amounts 93,111,113,186,256
    coin-change optimal --coins 1,3,4,6,10,25 --amounts 7,12,32,66,82
    coin-change compare --coins 1,3,4 --amounts 6 --format json
    coin-change generate --count 5 --seed 1 --output requests.json
    coin-change batch --input requests.json"#
    );
}

/// JSON schema for a batch request file.
#[derive(serde::Deserialize, serde::Serialize)]
struct ChangeRequest {
    denominations: Vec<i64>,
    amount: i64,
}

#[derive(serde::Deserialize, serde::Serialize)]
struct RequestsFile {
    requests: Vec<ChangeRequest>,
}

/// JSON output schema for a greedy result.
#[derive(serde::Serialize)]
struct GreedyOutput {
    amount: u64,
    coins: Decomposition,
    coin_count: u64,
    remainder: u64,
    exact: bool,
}

/// JSON output schema for a minimal-coin result.
#[derive(serde::Serialize)]
struct OptimalOutput {
    amount: u64,
    min_count: Option<u64>,
    total_solutions: usize,
    solutions: Vec<Decomposition>,
}

#[derive(serde::Serialize)]
struct ComparisonOutput {
    denominations: Vec<u64>,
    greedy: GreedyOutput,
    optimal: OptimalOutput,
    greedy_is_optimal: bool,
    excess_coins: Option<u64>,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(format!("could not serialize output: {}", e)),
    }
}

/// Options shared by the single-shot commands.
struct SolveOptions {
    coins: DenominationSet,
    amounts: Vec<Amount>,
    json: bool,
    limit: Option<usize>,
}

fn parse_amounts(list: &str) -> Vec<Amount> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let raw: i64 = s
                .parse()
                .unwrap_or_else(|_| fail(format!("invalid amount '{}'", s)));
            Amount::new(raw).unwrap_or_else(|e| fail(e))
        })
        .collect()
}

fn parse_format(value: Option<&String>) -> bool {
    match value.map(String::as_str) {
        Some("json") => true,
        Some("text") => false,
        _ => fail("--format requires 'text' or 'json'"),
    }
}

fn parse_solve_options(args: &[String]) -> SolveOptions {
    let mut coins = None;
    let mut amounts = None;
    let mut json = false;
    let mut limit = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--coins" => {
                i += 1;
                let list = args
                    .get(i)
                    .unwrap_or_else(|| fail("--coins requires a comma-separated list"));
                coins = Some(list.parse::<DenominationSet>().unwrap_or_else(|e| fail(e)));
            }
            "--amounts" => {
                i += 1;
                let list = args
                    .get(i)
                    .unwrap_or_else(|| fail("--amounts requires a comma-separated list"));
                amounts = Some(parse_amounts(list));
            }
            "--format" => {
                i += 1;
                json = parse_format(args.get(i));
            }
            "--limit" => {
                i += 1;
                limit = Some(
                    args.get(i)
                        .and_then(|s| s.parse().ok())
                        .unwrap_or_else(|| fail("--limit requires a number")),
                );
            }
            other => fail(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    SolveOptions {
        coins: coins.unwrap_or_else(|| fail("--coins <LIST> is required")),
        amounts: amounts.unwrap_or_else(|| fail("--amounts <LIST> is required")),
        json,
        limit,
    }
}

fn greedy_output(denominations: &DenominationSet, amount: Amount) -> GreedyOutput {
    let outcome = GreedyDecomposer::decompose_with_remainder(denominations, amount);
    GreedyOutput {
        amount: amount.value(),
        coin_count: outcome.decomposition.coin_count(),
        exact: outcome.is_exact(),
        remainder: outcome.remainder,
        coins: outcome.decomposition,
    }
}

fn optimal_output(denominations: &DenominationSet, amount: Amount, limit: Option<usize>) -> OptimalOutput {
    let result = MinCoinEnumerator::enumerate(denominations, amount);
    let mut solutions = result.sorted();
    if let Some(limit) = limit {
        solutions.truncate(limit);
    }
    OptimalOutput {
        amount: amount.value(),
        min_count: result.min_count(),
        total_solutions: result.len(),
        solutions,
    }
}

fn comparison_output(comparison: &ChangeComparison) -> ComparisonOutput {
    let greedy = &comparison.greedy;
    ComparisonOutput {
        denominations: comparison.denominations.iter().collect(),
        greedy: GreedyOutput {
            amount: greedy.amount.value(),
            coins: greedy.decomposition.clone(),
            coin_count: greedy.decomposition.coin_count(),
            remainder: greedy.remainder,
            exact: greedy.is_exact(),
        },
        optimal: OptimalOutput {
            amount: comparison.optimal.amount().value(),
            min_count: comparison.optimal.min_count(),
            total_solutions: comparison.optimal.len(),
            solutions: comparison.optimal.sorted(),
        },
        greedy_is_optimal: comparison.greedy_is_optimal(),
        excess_coins: comparison.excess_coins(),
    }
}

fn print_greedy_line(index: usize, output: &GreedyOutput) {
    if output.exact {
        println!("{:4}) {:>6} = {}", index + 1, output.amount, output.coins);
    } else {
        println!(
            "{:4}) {:>6} = {}  (short by {})",
            index + 1,
            output.amount,
            output.coins,
            output.remainder
        );
    }
}

fn print_optimal_line(index: usize, output: &OptimalOutput) {
    match output.min_count {
        None => println!("{:4}) {:>6} = no exact representation", index + 1, output.amount),
        Some(count) => {
            let parts: Vec<String> = output.solutions.iter().map(|s| s.to_string()).collect();
            let hidden = output.total_solutions - output.solutions.len();
            let suffix = if hidden > 0 {
                format!(" (+{} more)", hidden)
            } else {
                String::new()
            };
            println!(
                "{:4}) {:>6} = {}{}  [{} coin(s)]",
                index + 1,
                output.amount,
                parts.join(" or "),
                suffix,
                count
            );
        }
    }
}

fn cmd_greedy(args: &[String]) {
    let opts = parse_solve_options(args);
    let outputs: Vec<GreedyOutput> = opts
        .amounts
        .iter()
        .map(|&amount| greedy_output(&opts.coins, amount))
        .collect();

    if opts.json {
        print_json(&outputs);
    } else {
        println!("Coins: {}", opts.coins);
        for (i, output) in outputs.iter().enumerate() {
            print_greedy_line(i, output);
        }
    }
}

fn cmd_optimal(args: &[String]) {
    let opts = parse_solve_options(args);
    let outputs: Vec<OptimalOutput> = opts
        .amounts
        .iter()
        .map(|&amount| optimal_output(&opts.coins, amount, opts.limit))
        .collect();

    if opts.json {
        print_json(&outputs);
    } else {
        println!("Coins: {}", opts.coins);
        for (i, output) in outputs.iter().enumerate() {
            print_optimal_line(i, output);
        }
    }
}

fn cmd_compare(args: &[String]) {
    let opts = parse_solve_options(args);
    let comparisons: Vec<ChangeComparison> = opts
        .amounts
        .iter()
        .map(|&amount| ChangeComparison::compute(&opts.coins, amount))
        .collect();

    if opts.json {
        let outputs: Vec<ComparisonOutput> = comparisons.iter().map(comparison_output).collect();
        print_json(&outputs);
    } else {
        for comparison in &comparisons {
            println!("{}", comparison);
        }
    }
}

fn load_requests(path: &str) -> Vec<(DenominationSet, Amount)> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("reading file '{}': {}", path, e)));

    let file: RequestsFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "requests": [
    {{ "denominations": [1, 3, 4], "amount": 6 }}
  ]
}}"#
        );
        process::exit(1);
    });

    file.requests
        .into_iter()
        .enumerate()
        .map(|(i, request)| {
            let coins = DenominationSet::new(request.denominations)
                .unwrap_or_else(|e| fail(format!("request {}: {}", i + 1, e)));
            let amount = Amount::new(request.amount)
                .unwrap_or_else(|e| fail(format!("request {}: {}", i + 1, e)));
            (coins, amount)
        })
        .collect()
}

fn cmd_batch(args: &[String]) {
    let mut input_path = None;
    let mut json = false;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(
                    args.get(i)
                        .cloned()
                        .unwrap_or_else(|| fail("--input requires a file path")),
                );
            }
            "--format" => {
                i += 1;
                json = parse_format(args.get(i));
            }
            other => fail(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| fail("--input <FILE> is required"));
    let requests = load_requests(&path);
    let comparisons: Vec<ChangeComparison> = requests
        .iter()
        .map(|(coins, amount)| ChangeComparison::compute(coins, *amount))
        .collect();

    if json {
        let outputs: Vec<ComparisonOutput> = comparisons.iter().map(comparison_output).collect();
        print_json(&outputs);
    } else {
        for comparison in &comparisons {
            println!("{}", comparison);
        }
        let optimal = comparisons.iter().filter(|c| c.greedy_is_optimal()).count();
        println!("Greedy optimal in {} of {} request(s).", optimal, comparisons.len());
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = CaseConfig::default();
    let mut count = 10usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;

    fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
        args.get(i)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| fail(format!("{} requires a number", flag)))
    }

    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                count = number(args, i, "--count");
            }
            "--coins" => {
                i += 1;
                config.denomination_count = number(args, i, "--coins");
            }
            "--max-coin" => {
                i += 1;
                config.max_denomination = number(args, i, "--max-coin");
            }
            "--max-amount" => {
                i += 1;
                config.max_amount = number(args, i, "--max-amount");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(number(args, i, "--seed"));
            }
            "--no-unit" => config.include_unit_coin = false,
            "--output" => {
                i += 1;
                output_path = Some(
                    args.get(i)
                        .cloned()
                        .unwrap_or_else(|| fail("--output requires a file path")),
                );
            }
            other => fail(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    let file = RequestsFile {
        requests: generate_cases(&config, count)
            .into_iter()
            .map(|(coins, amount)| ChangeRequest {
                denominations: coins.iter().map(|c| c as i64).collect(),
                amount: amount.value() as i64,
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&file)
        .unwrap_or_else(|e| fail(format!("could not serialize output: {}", e)));

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| fail(format!("writing to '{}': {}", path, e)));
        eprintln!("Generated {} request(s) → {}", count, path);
    } else {
        println!("{}", json);
    }
}

fn cmd_demo() {
    println!("1. Greedy change");
    let coins = match DenominationSet::new([1, 2, 5, 10, 25, 50]) {
        Ok(coins) => coins,
        Err(e) => fail(e),
    };
    println!("Coins: {}", coins);
    for (i, payment) in [93u64, 111, 113, 186, 256].into_iter().enumerate() {
        print_greedy_line(i, &greedy_output(&coins, Amount::from(payment)));
    }

    println!("\n2. Minimal number of coins");
    let coins = match DenominationSet::new([1, 3, 4, 6, 10, 25]) {
        Ok(coins) => coins,
        Err(e) => fail(e),
    };
    println!("Coins: {}", coins);
    for (i, payment) in [7u64, 12, 32, 66, 82].into_iter().enumerate() {
        print_optimal_line(i, &optimal_output(&coins, Amount::from(payment), None));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    log::debug!("running '{}' with {} argument(s)", command, rest.len());

    match command {
        "greedy" => cmd_greedy(rest),
        "optimal" => cmd_optimal(rest),
        "compare" => cmd_compare(rest),
        "batch" => cmd_batch(rest),
        "generate" => cmd_generate(rest),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
