//! Maze grid model and randomized perfect-maze generation.
//!
//! This module contains the [`Grid`] type the rest of the game renders and walks on, along with the
//! generator that carves it. Passages are carved on the odd coordinates of a thick-walled grid with
//! an iterative depth-first backtracker, so every open cell ends up reachable from the start
//! through exactly one simple path.

use std::fmt;

use rand::{seq::SliceRandom as _, Rng};

use crate::types::{Direction, Position};

/// Smallest playable side length.
///
/// Anything below this is raised to it, as a side of three or less leaves no room for the start
/// and the goal to be distinct cells inside the border.
pub(crate) const MIN_DIMENSION: usize = 5;

/// Content of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// Impassable cell.
    Wall,
    /// Carved passage.
    Open,
    /// Cell the player starts on.
    Start,
    /// Cell the player has to reach.
    Goal,
}

impl Cell {
    /// ASCII representation used by the plain-text rendering of a grid.
    const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => ' ',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }
}

/// Grid axis, used to report which dimension was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Number of rows.
    Rows,
    /// Number of columns.
    Cols,
}

impl fmt::Display for Axis {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => write!(formatter, "rows"),
            Self::Cols => write!(formatter, "cols"),
        }
    }
}

/// Errors arising from maze generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum GenerationError {
    /// A dimension was not a positive integer.
    InvalidDimension {
        /// Axis the value was given for.
        axis: Axis,
        /// The offending value.
        value: usize,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { axis, value } => {
                write!(formatter, "invalid maze dimension: {axis} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Rectangular maze grid.
///
/// Both dimensions of a generated grid are odd. The outer border is always made of walls, and the
/// grid holds exactly one start and one goal cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Cells stored row by row.
    cells: Vec<Vec<Cell>>,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Coordinates of the start cell.
    start: Position,
    /// Coordinates of the goal cell.
    goal: Position,
}

impl Grid {
    /// Builds a grid of the given size with every cell set to `cell`.
    fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self {
            cells: vec![vec![cell; cols]; rows],
            rows,
            cols,
            start: Position::new(1, 1),
            goal: Position::new(rows.saturating_sub(2), cols.saturating_sub(2)),
        }
    }

    /// Number of rows in the grid.
    pub(crate) const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    pub(crate) const fn cols(&self) -> usize {
        self.cols
    }

    /// Coordinates of the start cell.
    pub(crate) const fn start(&self) -> Position {
        self.start
    }

    /// Coordinates of the goal cell.
    pub(crate) const fn goal(&self) -> Position {
        self.goal
    }

    /// Returns the cell at `position`, or `None` when it lies outside the grid.
    pub(crate) fn cell(&self, position: Position) -> Option<Cell> {
        self.cells.get(position.row)?.get(position.col).copied()
    }

    /// Iterates over the coordinates of every cell of the given kind, row by row.
    pub(crate) fn positions_of(&self, kind: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, line)| {
            line.iter()
                .enumerate()
                .filter(move |&(_, cell)| *cell == kind)
                .map(move |(col, _)| Position::new(row, col))
        })
    }

    /// Overwrites the cell at `position`. Out-of-bounds writes are ignored.
    fn set(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self
            .cells
            .get_mut(position.row)
            .and_then(|line| line.get_mut(position.col))
        {
            *slot = cell;
        }
    }

    /// Whether `position` lies strictly inside the outer border.
    const fn is_interior(&self, position: Position) -> bool {
        position.row > 0
            && position.col > 0
            && position.row + 1 < self.rows
            && position.col + 1 < self.cols
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            for cell in line {
                write!(formatter, "{}", cell.symbol())?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}

/// Pending work for one visited cell of the backtracker.
///
/// Each visit owns its own shuffled direction list, so the explicit stack visits cells in exactly
/// the order a recursive carve would.
struct Visit {
    /// Cell this visit carves from.
    position: Position,
    /// Carving directions, in the order they will be tried.
    directions: [Direction; 4],
    /// Index of the next direction to try.
    cursor: usize,
}

impl Visit {
    /// Opens a visit on `position` with a uniformly shuffled direction order.
    fn new<R: Rng + ?Sized>(position: Position, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        Self {
            position,
            directions,
            cursor: 0,
        }
    }

    /// Returns the next untried direction, if any remain.
    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(direction)
    }
}

/// Rounds a requested side length up to a playable odd size.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDimension`] when `value` is zero.
fn effective_dimension(axis: Axis, value: usize) -> Result<usize, GenerationError> {
    if value == 0 {
        return Err(GenerationError::InvalidDimension { axis, value });
    }

    let odd = if value % 2 == 0 { value + 1 } else { value };
    Ok(odd.max(MIN_DIMENSION))
}

/// Generates a random perfect maze.
///
/// Even dimensions are bumped to the next odd value and dimensions smaller than
/// [`MIN_DIMENSION`] are raised to it, so the resulting grid is always odd-sized and at least as
/// large as requested. The start cell sits at `(1, 1)` and the goal at `(rows - 2, cols - 2)`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDimension`] if either dimension is zero.
pub(crate) fn generate<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Grid, GenerationError> {
    let rows = effective_dimension(Axis::Rows, rows)?;
    let cols = effective_dimension(Axis::Cols, cols)?;

    let mut grid = Grid::filled(rows, cols, Cell::Wall);
    let origin = grid.start();
    grid.set(origin, Cell::Open);

    let mut stack = vec![Visit::new(origin, rng)];
    while let Some(visit) = stack.last_mut() {
        let Some(direction) = visit.next_direction() else {
            let _ = stack.pop();
            continue;
        };
        let current = visit.position;

        let Some(neighbour) = current.offset(direction, 2) else {
            continue;
        };
        if !grid.is_interior(neighbour) || grid.cell(neighbour) != Some(Cell::Wall) {
            continue;
        }

        if let Some(passage) = current.offset(direction, 1) {
            grid.set(passage, Cell::Open);
        }
        grid.set(neighbour, Cell::Open);
        stack.push(Visit::new(neighbour, rng));
    }

    let goal = grid.goal();
    grid.set(origin, Cell::Start);
    grid.set(goal, Cell::Goal);

    Ok(grid)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::{HashSet, VecDeque};

    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    /// Builds a grid from an ASCII drawing using the same symbols as the [`Display`] output.
    ///
    /// The start and goal coordinates are taken from wherever `S` and `G` appear.
    pub(crate) fn grid_from_ascii(drawing: &str) -> Grid {
        let cells: Vec<Vec<Cell>> = drawing
            .lines()
            .map(|line| {
                line.chars()
                    .map(|symbol| match symbol {
                        '#' => Cell::Wall,
                        'S' => Cell::Start,
                        'G' => Cell::Goal,
                        _ => Cell::Open,
                    })
                    .collect()
            })
            .collect();
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        let mut grid = Grid::filled(rows, cols, Cell::Wall);
        grid.cells = cells;
        let start = grid
            .positions_of(Cell::Start)
            .next()
            .expect("drawing should contain a start cell");
        let goal = grid
            .positions_of(Cell::Goal)
            .next()
            .expect("drawing should contain a goal cell");
        grid.start = start;
        grid.goal = goal;
        grid
    }

    /// Collects the non-wall neighbours of `position`.
    fn open_neighbours(grid: &Grid, position: Position) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| position.offset(direction, 1))
            .filter(|&next| grid.cell(next).is_some_and(|cell| cell != Cell::Wall))
            .collect()
    }

    /// Breadth-first flood from the start cell, returning every reachable non-wall cell.
    fn reachable_from_start(grid: &Grid) -> HashSet<Position> {
        let mut seen = HashSet::from([grid.start()]);
        let mut queue = VecDeque::from([grid.start()]);

        while let Some(position) = queue.pop_front() {
            for next in open_neighbours(grid, position) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    fn non_wall_count(grid: &Grid) -> usize {
        grid.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Wall)
            .count()
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_generate_five_by_five() {
        let grid = generate(5, 5, &mut seeded(7)).expect("5x5 generation should succeed");

        assert_eq!((grid.rows(), grid.cols()), (5, 5));
        assert_eq!(grid.cell(Position::new(1, 1)), Some(Cell::Start));
        assert_eq!(grid.cell(Position::new(3, 3)), Some(Cell::Goal));

        for index in 0..5 {
            for edge in [
                Position::new(0, index),
                Position::new(4, index),
                Position::new(index, 0),
                Position::new(index, 4),
            ] {
                assert_eq!(grid.cell(edge), Some(Cell::Wall), "border cell {edge:?}");
            }
        }
    }

    #[test]
    fn test_generate_rounds_even_dimensions_up() {
        let grid = generate(20, 8, &mut seeded(1)).expect("generation should succeed");

        assert_eq!((grid.rows(), grid.cols()), (21, 9));
        assert_eq!(grid.goal(), Position::new(19, 7));
    }

    #[test]
    fn test_generate_raises_tiny_dimensions() {
        let grid = generate(1, 2, &mut seeded(1)).expect("generation should succeed");

        assert_eq!((grid.rows(), grid.cols()), (MIN_DIMENSION, MIN_DIMENSION));
        assert_ne!(grid.start(), grid.goal());
    }

    #[test]
    fn test_generate_rejects_zero() {
        let rows = generate(0, 5, &mut seeded(1));
        let cols = generate(5, 0, &mut seeded(1));

        assert_eq!(
            rows,
            Err(GenerationError::InvalidDimension {
                axis: Axis::Rows,
                value: 0
            })
        );
        assert_eq!(
            cols,
            Err(GenerationError::InvalidDimension {
                axis: Axis::Cols,
                value: 0
            })
        );
    }

    #[test]
    fn test_generation_error_display() {
        let error = GenerationError::InvalidDimension {
            axis: Axis::Cols,
            value: 0,
        };

        assert_eq!(
            error.to_string(),
            "invalid maze dimension: cols must be positive, got 0"
        );
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let first = generate(15, 15, &mut seeded(42)).expect("generation should succeed");
        let second = generate(15, 15, &mut seeded(42)).expect("generation should succeed");
        let other = generate(15, 15, &mut seeded(43)).expect("generation should succeed");

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_generate_large_grid_does_not_recurse() {
        let grid = generate(401, 401, &mut seeded(3)).expect("generation should succeed");

        assert!(reachable_from_start(&grid).contains(&grid.goal()));
    }

    #[test]
    fn test_display_ascii() {
        let grid = grid_from_ascii("#####\n#S  #\n### #\n#G  #\n#####");

        assert_eq!(grid.to_string(), "#####\n#S  #\n### #\n#G  #\n#####\n");
        assert_eq!(grid.start(), Position::new(1, 1));
        assert_eq!(grid.goal(), Position::new(3, 1));
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let grid = generate(5, 7, &mut seeded(9)).expect("generation should succeed");

        assert_eq!(grid.cell(Position::new(5, 0)), None);
        assert_eq!(grid.cell(Position::new(0, 7)), None);
    }

    proptest! {
        #[test]
        fn generated_dimensions_are_odd_and_not_smaller(
            rows in 1usize..40,
            cols in 1usize..40,
            seed in any::<u64>(),
        ) {
            let grid = generate(rows, cols, &mut seeded(seed)).expect("generation should succeed");

            prop_assert_eq!(grid.rows() % 2, 1);
            prop_assert_eq!(grid.cols() % 2, 1);
            prop_assert!(grid.rows() >= rows);
            prop_assert!(grid.cols() >= cols);
        }

        #[test]
        fn generated_grid_has_single_start_and_goal(
            rows in 1usize..40,
            cols in 1usize..40,
            seed in any::<u64>(),
        ) {
            let grid = generate(rows, cols, &mut seeded(seed)).expect("generation should succeed");
            let starts: Vec<Position> = grid.positions_of(Cell::Start).collect();
            let goals: Vec<Position> = grid.positions_of(Cell::Goal).collect();

            prop_assert_eq!(starts, vec![Position::new(1, 1)]);
            prop_assert_eq!(goals, vec![Position::new(grid.rows() - 2, grid.cols() - 2)]);
        }

        #[test]
        fn generated_grid_is_a_perfect_maze(
            rows in 1usize..40,
            cols in 1usize..40,
            seed in any::<u64>(),
        ) {
            let grid = generate(rows, cols, &mut seeded(seed)).expect("generation should succeed");
            let reachable = reachable_from_start(&grid);
            let open = non_wall_count(&grid);

            // Connected: the flood from the start covers every open cell, goal included.
            prop_assert!(reachable.contains(&grid.goal()));
            prop_assert_eq!(reachable.len(), open);

            // Acyclic: a connected graph is a tree exactly when it has one edge fewer than nodes.
            let degree_sum: usize = reachable
                .iter()
                .map(|&position| open_neighbours(&grid, position).len())
                .sum();
            prop_assert_eq!(degree_sum / 2, open - 1);
        }

        #[test]
        fn generated_border_is_all_walls(
            rows in 1usize..40,
            cols in 1usize..40,
            seed in any::<u64>(),
        ) {
            let grid = generate(rows, cols, &mut seeded(seed)).expect("generation should succeed");
            let last_row = grid.rows() - 1;
            let last_col = grid.cols() - 1;

            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    if row == 0 || col == 0 || row == last_row || col == last_col {
                        prop_assert_eq!(grid.cell(Position::new(row, col)), Some(Cell::Wall));
                    }
                }
            }
        }
    }
}
