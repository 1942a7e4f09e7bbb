//! Shortest escape through a 0/1 maze when one wall may be knocked down.
//!
//! Two breadth-first cost matrices are built, one rooted at the start and one at the goal.
//! A removable wall is worth considering only when it touches a cell reachable from each side;
//! its cost is the cheapest start-side neighbour plus the cheapest goal-side neighbour plus the
//! wall itself.

use std::{
    collections::VecDeque,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use log::debug;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::InvalidInput;

pub const MIN_SIDE: usize = 2;
pub const MAX_SIDE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Passable,
    Wall,
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Passable),
            1 => Ok(Cell::Wall),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A validated rectangular maze. The top-left and bottom-right cells are always passable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>")]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, InvalidInput> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let sides = MIN_SIDE..=MAX_SIDE;
        if !sides.contains(&height) || !sides.contains(&width) {
            return Err(InvalidInput::Dimensions { height, width });
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(InvalidInput::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        let grid = Self {
            cells: rows.into_iter().flatten().collect(),
            height,
            width,
        };
        for end in [grid.start(), grid.goal()] {
            if grid.is_wall(end) {
                return Err(InvalidInput::BlockedEndpoint(end));
            }
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Coord {
        Coord::ORIGIN
    }

    pub fn goal(&self) -> Coord {
        Coord::new(self.height - 1, self.width - 1)
    }

    #[inline]
    fn index(&self, at: Coord) -> usize {
        at.row * self.width + at.col
    }

    pub fn cell(&self, at: Coord) -> Cell {
        self.cells[self.index(at)]
    }

    pub fn is_wall(&self, at: Coord) -> bool {
        self.cell(at) == Cell::Wall
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coord::new(row, col)))
    }

    /// In-bounds cardinal neighbours of `at`, whatever they hold.
    pub fn neighbors(&self, at: Coord) -> impl Iterator<Item = Coord> {
        let up = (at.row > 0).then(|| Coord::new(at.row - 1, at.col));
        let left = (at.col > 0).then(|| Coord::new(at.row, at.col - 1));
        let right = (at.col + 1 < self.width).then(|| Coord::new(at.row, at.col + 1));
        let down = (at.row + 1 < self.height).then(|| Coord::new(at.row + 1, at.col));
        [up, left, right, down].into_iter().flatten()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = InvalidInput;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .into_iter()
                    .enumerate()
                    .map(|(col, value)| {
                        Cell::try_from(value).map_err(|value| InvalidInput::BadCell {
                            at: Coord::new(row, col),
                            value,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::new(rows)
    }
}

/// Parses lines of `0`/`1` characters. Blank lines and whitespace within a line are ignored.
impl FromStr for Grid {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .enumerate()
                    .map(|(col, c)| match c {
                        '0' => Ok(0),
                        '1' => Ok(1),
                        other => Err(InvalidInput::BadCell {
                            at: Coord::new(row, col),
                            value: other.to_digit(10).map_or(u8::MAX, |d| d as u8),
                        }),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::try_from(rows)
    }
}

/// Minimum node count (source included) to reach each cell over passable cells only.
/// `None` marks cells the source cannot reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    costs: Vec<Option<usize>>,
    width: usize,
}

impl CostMatrix {
    pub fn from_source(grid: &Grid, source: Coord) -> Self {
        let mut costs = vec![None; grid.height() * grid.width()];
        let mut queue = VecDeque::new();
        costs[grid.index(source)] = Some(1);
        queue.push_back((source, 1));

        while let Some((pos, cost)) = queue.pop_front() {
            for next in grid.neighbors(pos) {
                if grid.is_wall(next) {
                    continue;
                }
                let slot = &mut costs[grid.index(next)];
                if slot.is_none() {
                    *slot = Some(cost + 1);
                    queue.push_back((next, cost + 1));
                }
            }
        }

        Self {
            costs,
            width: grid.width(),
        }
    }

    #[inline]
    pub fn get(&self, at: Coord) -> Option<usize> {
        self.costs[at.row * self.width + at.col]
    }

    /// Reachable cells in row-major order.
    pub fn reachable(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.costs
            .iter()
            .enumerate()
            .filter(|(_, cost)| cost.is_some())
            .map(move |(i, _)| Coord::new(i / width, i % width))
    }
}

/// The best escape found for a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escape {
    /// Nodes on the route, start and goal included.
    pub length: usize,
    pub removed_wall: Option<Coord>,
    /// One optimal route from start to goal; `route.len() == length`.
    pub route: Vec<Coord>,
}

#[derive(Debug, Clone, Copy)]
enum Plan {
    Direct,
    Through {
        wall: Coord,
        before: Coord,
        after: Coord,
    },
}

pub struct Solver<'a> {
    grid: &'a Grid,
    from_start: CostMatrix,
    from_goal: CostMatrix,
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        let from_start = CostMatrix::from_source(grid, grid.start());
        let from_goal = CostMatrix::from_source(grid, grid.goal());
        debug!(
            "{}x{} maze: {} cells reachable from start, {} from goal",
            grid.height(),
            grid.width(),
            from_start.reachable().count(),
            from_goal.reachable().count()
        );
        Self {
            grid,
            from_start,
            from_goal,
        }
    }

    pub fn from_start(&self) -> &CostMatrix {
        &self.from_start
    }

    pub fn from_goal(&self) -> &CostMatrix {
        &self.from_goal
    }

    /// Finds the shortest route, removing at most one wall. Ties keep the wall-free route,
    /// then the first wall in row-major order.
    pub fn solve(&self) -> Result<Escape, InvalidInput> {
        let mut best = self
            .from_start
            .get(self.grid.goal())
            .map(|length| (length, Plan::Direct));

        for wall in self.candidate_walls() {
            let Some((before_cost, before)) = self.cheapest_neighbor(&self.from_start, wall) else {
                continue;
            };
            let Some((after_cost, after)) = self.cheapest_neighbor(&self.from_goal, wall) else {
                continue;
            };
            let length = before_cost + after_cost + 1;
            if best.map_or(true, |(best_len, _)| length < best_len) {
                best = Some((
                    length,
                    Plan::Through {
                        wall,
                        before,
                        after,
                    },
                ));
            }
        }

        let (length, plan) = best.ok_or(InvalidInput::Unsolvable)?;
        let (removed_wall, route) = match plan {
            Plan::Direct => {
                let mut route = self.descend(&self.from_start, self.grid.goal());
                route.reverse();
                (None, route)
            }
            Plan::Through {
                wall,
                before,
                after,
            } => {
                let mut route = self.descend(&self.from_start, before);
                route.reverse();
                route.push(wall);
                route.extend(self.descend(&self.from_goal, after));
                (Some(wall), route)
            }
        };

        Ok(Escape {
            length,
            removed_wall,
            route,
        })
    }

    /// Walls touching a start-reachable cell and a goal-reachable cell, in row-major order.
    fn candidate_walls(&self) -> Vec<Coord> {
        let near_start = self.walls_next_to(&self.from_start);
        let near_goal = self.walls_next_to(&self.from_goal);
        let mut walls: Vec<_> = near_start.intersection(&near_goal).copied().collect();
        walls.sort_unstable();
        debug!("{} candidate walls", walls.len());
        walls
    }

    fn walls_next_to(&self, costs: &CostMatrix) -> FxHashSet<Coord> {
        costs
            .reachable()
            .flat_map(|at| self.grid.neighbors(at))
            .filter(|&at| self.grid.is_wall(at))
            .collect()
    }

    fn cheapest_neighbor(&self, costs: &CostMatrix, at: Coord) -> Option<(usize, Coord)> {
        self.grid
            .neighbors(at)
            .filter_map(|n| costs.get(n).map(|cost| (cost, n)))
            .min()
    }

    /// Follows strictly decreasing costs from `from` back to the matrix's source.
    fn descend(&self, costs: &CostMatrix, from: Coord) -> Vec<Coord> {
        let mut path = vec![from];
        let mut at = from;
        while let Some(cost) = costs.get(at).filter(|&cost| cost > 1) {
            match self
                .grid
                .neighbors(at)
                .find(|&n| costs.get(n) == Some(cost - 1))
            {
                Some(next) => {
                    path.push(next);
                    at = next;
                }
                None => break,
            }
        }
        path
    }
}

/// Length of the shortest escape through `maze` (0 = passable, 1 = wall) with at most one
/// wall removed, counting both the entrance and the exit.
pub fn solve_maze(maze: &[Vec<u8>]) -> Result<usize, InvalidInput> {
    let grid = Grid::try_from(maze.to_vec())?;
    Ok(Solver::new(&grid).solve()?.length)
}
