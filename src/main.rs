use std::{fs, path::Path};

use anyhow::{Context, Result};
use gumdrop::Options;
use log::info;

use lambchop::{
    draw,
    maze::{Grid, Solver},
    staircase::{self, StaircaseCounter},
};

mod opts;

use opts::{
    CountStaircasesOpts, CountTableOpts, DrawMazeOpts, Opts, ShowStaircasesOpts, SolveMazeOpts,
};

/// Reads a maze either as a JSON array of rows or as lines of `0`/`1`.
fn load_grid(path: &Path) -> Result<Grid> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let grid: Grid = if text.trim_start().starts_with('[') {
        serde_json::from_str(&text)?
    } else {
        text.parse()?
    };
    Ok(grid)
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse_args_default_or_exit();

    match opts {
        Opts::SolveMaze(SolveMazeOpts { maze_path }) => {
            let grid = load_grid(&maze_path)?;
            let escape = Solver::new(&grid).solve()?;
            match escape.removed_wall {
                Some(wall) => info!("removing wall {wall}"),
                None => info!("no wall removed"),
            }
            println!("{}", escape.length);
        }
        Opts::DrawMaze(DrawMazeOpts {
            maze_path,
            out_path,
        }) => {
            let grid = load_grid(&maze_path)?;
            let escape = Solver::new(&grid).solve()?;
            draw::draw_maze(&grid, &escape)
                .save(&out_path)
                .with_context(|| format!("writing {}", out_path.display()))?;
            info!("{} step route drawn to {}", escape.length, out_path.display());
        }
        Opts::CountStaircases(CountStaircasesOpts { n }) => {
            println!("{}", staircase::count_staircases(n)?);
        }
        Opts::CountTable(CountTableOpts { start, end }) => {
            let mut counter = StaircaseCounter::new();
            let counts = (start..=end)
                .map(|n| counter.count_checked(n))
                .collect::<Result<Vec<_>, _>>()?;
            info!("memo holds {} entries", counter.memo_len());
            println!("{}", serde_json::to_string(&counts)?);
        }
        Opts::ShowStaircases(ShowStaircasesOpts { n }) => {
            let mut total = 0;
            staircase::for_each_staircase(n, &mut |s| {
                total += 1;
                println!("\x1b[36m================ {:?}\x1b[m", s.steps);
                println!("{s}");
            });
            println!("\x1b[32;1m{total} staircases of {n} bricks\x1b[m");
        }
    }

    Ok(())
}
