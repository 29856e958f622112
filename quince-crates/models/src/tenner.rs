//! Models of the Tenner grid puzzle.
//!
//! A Tenner grid has ten columns and a number of rows. Every row contains each digit 0 to 9
//! exactly once, cells which touch horizontally, vertically or diagonally hold different digits,
//! and the digits of every column add up to the sum given below that column.

use log::debug;
use quince_core::constraints::Constraint;
use quince_core::variables::VariableId;
use quince_core::Csp;

use crate::table::all_different_tuples;
use crate::table::not_equal_tuples;
use crate::table::sum_tuples;
use crate::TennerError;

pub const NUM_COLUMNS: usize = 10;

/// The starting position of a Tenner grid; `None` is an empty cell and `Some(digit)` a digit given
/// by the puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TennerBoard {
    pub cells: Vec<[Option<u8>; NUM_COLUMNS]>,
    pub column_sums: [u32; NUM_COLUMNS],
}

impl TennerBoard {
    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    fn validate(&self) -> Result<(), TennerError> {
        if self.cells.is_empty() {
            return Err(TennerError::EmptyBoard);
        }

        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                if let Some(value) = cell.filter(|value| *value > 9) {
                    return Err(TennerError::InvalidCellValue { row, column, value });
                }
            }
        }

        let rows = self.num_rows();
        for (column, sum) in self.column_sums.iter().enumerate() {
            if *sum as usize > 9 * rows {
                return Err(TennerError::UnreachableColumnSum {
                    column,
                    sum: *sum,
                    rows,
                });
            }
        }

        Ok(())
    }
}

/// The variables of a Tenner model, `cells[row][column]` being the variable of that cell.
pub type TennerCells = Vec<Vec<VariableId>>;

/// Models the board with binary not-equal constraints between every pair of cells in the same row
/// and between touching cells of consecutive rows, and a sum constraint per column.
pub fn tenner_model_binary(board: &TennerBoard) -> Result<(Csp, TennerCells), TennerError> {
    let (mut csp, cells) = create_cells("tenner-binary", board)?;

    for row in &cells {
        for (column, cell) in row.iter().enumerate() {
            for other in &row[..column] {
                add_not_equal(&mut csp, *other, *cell)?;
            }
        }
    }
    add_adjacency_constraints(&mut csp, &cells)?;
    add_column_sums(&mut csp, &cells, board)?;

    debug!(
        "Created the binary Tenner model with {} variables and {} constraints",
        csp.num_variables(),
        csp.num_constraints()
    );
    Ok((csp, cells))
}

/// Models the board with an all-different constraint per row, binary not-equal constraints
/// between touching cells of consecutive rows, and a sum constraint per column.
///
/// The all-different constraints list every permutation of the empty cells of their row, so this
/// model is only suitable when rows have few empty cells.
pub fn tenner_model_nary(board: &TennerBoard) -> Result<(Csp, TennerCells), TennerError> {
    let (mut csp, cells) = create_cells("tenner-nary", board)?;

    for (index, row) in cells.iter().enumerate() {
        let tuples = {
            let domains = row
                .iter()
                .map(|cell| csp.variable(*cell).domain())
                .collect::<Vec<_>>();
            all_different_tuples(&domains)
        };

        let mut constraint = Constraint::new(format!("Row{index}"), row.iter().copied());
        constraint.add_satisfying_tuples(tuples)?;
        let _ = csp.add_constraint(constraint)?;
    }
    add_adjacency_constraints(&mut csp, &cells)?;
    add_column_sums(&mut csp, &cells, board)?;

    debug!(
        "Created the n-ary Tenner model with {} variables and {} constraints",
        csp.num_variables(),
        csp.num_constraints()
    );
    Ok((csp, cells))
}

fn create_cells(name: &str, board: &TennerBoard) -> Result<(Csp, TennerCells), TennerError> {
    board.validate()?;

    let mut csp = Csp::new(name);
    let cells = board
        .cells
        .iter()
        .enumerate()
        .map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(|(column, value)| {
                    let name = format!("V[{row}][{column}]");
                    match value {
                        Some(value) => csp.new_variable(name, [i32::from(*value)]),
                        None => csp.new_variable(name, 0..=9),
                    }
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((csp, cells))
}

/// Cells in consecutive rows which touch vertically or diagonally have to differ.
fn add_adjacency_constraints(csp: &mut Csp, cells: &TennerCells) -> Result<(), TennerError> {
    for (above, below) in cells.iter().zip(cells.iter().skip(1)) {
        for (column, cell) in below.iter().enumerate() {
            let touching = column.saturating_sub(1)..=(column + 1).min(NUM_COLUMNS - 1);
            for other in &above[touching] {
                add_not_equal(csp, *other, *cell)?;
            }
        }
    }

    Ok(())
}

fn add_column_sums(
    csp: &mut Csp,
    cells: &TennerCells,
    board: &TennerBoard,
) -> Result<(), TennerError> {
    for (column, sum) in board.column_sums.iter().enumerate() {
        let scope = cells.iter().map(|row| row[column]).collect::<Vec<_>>();
        let tuples = {
            let domains = scope
                .iter()
                .map(|cell| csp.variable(*cell).domain())
                .collect::<Vec<_>>();
            sum_tuples(&domains, *sum as i32)
        };

        let mut constraint = Constraint::new(format!("Column{column}"), scope);
        constraint.add_satisfying_tuples(tuples)?;
        let _ = csp.add_constraint(constraint)?;
    }

    Ok(())
}

fn add_not_equal(csp: &mut Csp, first: VariableId, second: VariableId) -> Result<(), TennerError> {
    let tuples = not_equal_tuples(csp.variable(first).domain(), csp.variable(second).domain());
    let name = format!(
        "{} != {}",
        csp.variable(first).name(),
        csp.variable(second).name()
    );

    let mut constraint = Constraint::new(name, [first, second]);
    constraint.add_satisfying_tuples(tuples)?;
    let _ = csp.add_constraint(constraint)?;
    Ok(())
}
