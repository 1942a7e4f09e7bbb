//! Option structs for CLI parsing.

use std::path::PathBuf;

use gumdrop::Options;

#[derive(Debug, Options)]
pub enum Opts {
    SolveMaze(SolveMazeOpts),
    DrawMaze(DrawMazeOpts),
    CountStaircases(CountStaircasesOpts),
    CountTable(CountTableOpts),
    ShowStaircases(ShowStaircasesOpts),
}

#[derive(Debug, Options)]
pub struct SolveMazeOpts {
    #[options(free)]
    pub maze_path: PathBuf,
}

#[derive(Debug, Options)]
pub struct DrawMazeOpts {
    #[options(free)]
    pub maze_path: PathBuf,

    #[options(free)]
    pub out_path: PathBuf,
}

#[derive(Debug, Options)]
pub struct CountStaircasesOpts {
    #[options(free)]
    pub n: u32,
}

#[derive(Debug, Options)]
pub struct CountTableOpts {
    #[options(free)]
    pub start: u32,

    #[options(free)]
    pub end: u32,
}

#[derive(Debug, Options)]
pub struct ShowStaircasesOpts {
    #[options(free)]
    pub n: u32,
}
