//! Solves a Tenner grid with a configurable propagator and variable ordering.
use std::io::Write;
use std::time::Duration;

use clap::Parser;
use clap::ValueEnum;
use log::error;
use log::info;
use log::LevelFilter;
use quince_core::convert_case::Case;
use quince_core::propagation::PropagationMethod;
use quince_core::search::BacktrackingSearch;
use quince_core::search::SatisfactionResult;
use quince_core::search::SearchOptions;
use quince_core::search::VariableOrdering;
use quince_core::statistics::configure_statistic_logging;
use quince_core::termination::Combinator;
use quince_core::termination::DecisionBudget;
use quince_core::termination::TimeBudget;
use quince_models::tenner_model_binary;
use quince_models::tenner_model_nary;
use quince_models::TennerBoard;
use quince_models::TennerError;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Model {
    /// Pairwise not-equal constraints within every row.
    Binary,
    /// One all-different constraint per row.
    Nary,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The propagator run after every assignment.
    #[arg(long, value_enum, default_value_t)]
    propagator: PropagationMethod,

    /// The order in which the cells are assigned.
    #[arg(long, value_enum, default_value_t)]
    ordering: VariableOrdering,

    /// How the rows of the grid are modelled.
    #[arg(long, value_enum, default_value_t = Model::Binary)]
    model: Model,

    /// The seed used when ties are broken randomly.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop the search after this many decisions.
    #[arg(long)]
    decision_budget: Option<u64>,

    /// Stop the search after this many milliseconds.
    #[arg(long)]
    time_budget_ms: Option<u64>,

    /// Log the progress of the search.
    #[arg(short, long)]
    verbose: bool,

    /// Print the statistics of the search.
    #[arg(short = 's', long)]
    log_statistics: bool,
}

/// A grid of three rows whose rows are shifts of 0 to 9; the empty cells are determined by the
/// column sums.
fn board() -> TennerBoard {
    TennerBoard {
        cells: vec![
            [None, None, Some(2), Some(3), Some(4), None, Some(6), Some(7), Some(8), Some(9)],
            [Some(3), None, Some(5), Some(6), None, Some(8), Some(9), None, Some(1), Some(2)],
            [Some(6), Some(7), None, Some(9), Some(0), Some(1), None, Some(3), Some(4), None],
        ],
        column_sums: [9, 12, 15, 18, 11, 14, 17, 10, 13, 16],
    }
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%% stat:", Some("%% stat-end"), Some(Case::Camel), None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "% {}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    if let Err(e) = run() {
        error!("Execution failed, error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), TennerError> {
    let args = Args::parse();
    configure_logging(args.verbose, args.log_statistics);

    let board = board();
    let (mut csp, cells) = match args.model {
        Model::Binary => tenner_model_binary(&board)?,
        Model::Nary => tenner_model_nary(&board)?,
    };

    let mut termination = Combinator::new(
        args.decision_budget.map(DecisionBudget::new),
        args.time_budget_ms
            .map(|budget| TimeBudget::starting_now(Duration::from_millis(budget))),
    );
    let mut search = BacktrackingSearch::new(SearchOptions {
        propagation: args.propagator,
        variable_ordering: args.ordering,
        random_seed: args.seed,
    });

    match search.satisfy(&mut csp, &mut termination) {
        SatisfactionResult::Satisfiable(solution) => {
            for row in &cells {
                let digits = row
                    .iter()
                    .map(|cell| solution.value(*cell).to_string())
                    .collect::<Vec<_>>();
                println!("{}", digits.join(" "));
            }
        }
        SatisfactionResult::Unsatisfiable => println!("UNSATISFIABLE"),
        SatisfactionResult::Unknown => println!("UNKNOWN"),
    }
    search.log_statistics();

    Ok(())
}
