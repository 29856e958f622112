#![cfg(test)]

use quince_core::propagation::PropagationMethod;
use quince_core::search::BacktrackingSearch;
use quince_core::search::SatisfactionResult;
use quince_core::search::SearchOptions;
use quince_core::search::VariableOrdering;
use quince_core::termination::Indefinite;
use quince_core::Csp;
use quince_models::tenner::TennerCells;
use quince_models::tenner_model_binary;
use quince_models::tenner_model_nary;
use quince_models::TennerBoard;
use quince_models::TennerError;

type ModelBuilder = fn(&TennerBoard) -> Result<(Csp, TennerCells), TennerError>;

const MODELS: [ModelBuilder; 2] = [tenner_model_binary, tenner_model_nary];

const METHODS: [PropagationMethod; 3] = [
    PropagationMethod::PlainBacktracking,
    PropagationMethod::ForwardChecking,
    PropagationMethod::GeneralisedArcConsistency,
];

/// Row `r` holds `(column + 3 * r) % 10`.
fn solved_grid(rows: usize) -> Vec<[u8; 10]> {
    (0..rows)
        .map(|row| std::array::from_fn(|column| ((column + 3 * row) % 10) as u8))
        .collect()
}

fn column_sums(grid: &[[u8; 10]]) -> [u32; 10] {
    std::array::from_fn(|column| grid.iter().map(|row| u32::from(row[column])).sum())
}

/// The solved grid with the given cells emptied.
fn board_with_empty_cells(rows: usize, empty: &[(usize, usize)]) -> TennerBoard {
    let grid = solved_grid(rows);
    let mut cells = grid
        .iter()
        .map(|row| row.map(Some))
        .collect::<Vec<_>>();
    for (row, column) in empty {
        cells[*row][*column] = None;
    }

    TennerBoard {
        cells,
        column_sums: column_sums(&grid),
    }
}

fn solve(
    model: ModelBuilder,
    board: &TennerBoard,
    options: SearchOptions,
) -> (SatisfactionResult, TennerCells) {
    let (mut csp, cells) = model(board).expect("the board is well-formed");
    let mut search = BacktrackingSearch::new(options);
    (search.satisfy(&mut csp, &mut Indefinite), cells)
}

#[test]
fn every_model_and_propagator_fills_in_the_grid() {
    let board = board_with_empty_cells(
        3,
        &[(0, 0), (0, 1), (0, 5), (1, 1), (1, 4), (1, 7), (2, 2), (2, 6), (2, 9)],
    );
    let expected = solved_grid(3);

    for model in MODELS {
        for propagation in METHODS {
            for variable_ordering in [
                VariableOrdering::InputOrder,
                VariableOrdering::MinimumRemainingValues,
            ] {
                let (result, cells) = solve(
                    model,
                    &board,
                    SearchOptions {
                        propagation,
                        variable_ordering,
                        random_seed: 0,
                    },
                );

                let solution = result.solution().expect("the board has a solution");
                for (row, row_cells) in cells.iter().enumerate() {
                    for (column, cell) in row_cells.iter().enumerate() {
                        assert_eq!(
                            solution.value(*cell),
                            i32::from(expected[row][column]),
                            "{propagation} with {variable_ordering} ordering"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn contradicting_column_sum_is_unsatisfiable() {
    let mut board = board_with_empty_cells(2, &[(0, 0)]);
    // The empty cell would have to be 1, which is already in its row.
    board.column_sums[0] += 1;

    for model in MODELS {
        for propagation in METHODS {
            let (result, _) = solve(
                model,
                &board,
                SearchOptions {
                    propagation,
                    ..Default::default()
                },
            );

            assert_eq!(result, SatisfactionResult::Unsatisfiable);
        }
    }
}

#[test]
fn propagation_alone_solves_a_board_with_one_empty_cell_per_column() {
    let board = board_with_empty_cells(2, &[(0, 3), (1, 4), (0, 9)]);

    for model in MODELS {
        let (mut csp, cells) = model(&board).unwrap();
        let result = PropagationMethod::GeneralisedArcConsistency.propagate(&mut csp, None);

        assert!(result.is_consistent());
        assert_eq!(csp.current_domain(cells[0][3]), vec![3]);
        assert_eq!(csp.current_domain(cells[1][4]), vec![7]);
        assert_eq!(csp.current_domain(cells[0][9]), vec![9]);
    }
}

#[test]
fn cells_are_named_by_position() {
    let board = board_with_empty_cells(2, &[]);
    let (csp, cells) = tenner_model_nary(&board).unwrap();

    assert_eq!(csp.variable(cells[1][8]).name(), "V[1][8]");
    assert_eq!(csp.variable(cells[1][8]).domain(), &[1]);
}
