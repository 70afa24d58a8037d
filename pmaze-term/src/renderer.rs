use crossterm::style::Stylize as _;
use pmaze::{
    array::Array2D,
    gameboard::{CellWall, Walls},
    Dims, Maze,
};

use crate::settings::{Color, RenderSettings};

const CORNER: char = '+';
const H_WALL: &str = "--";
const V_WALL: char = '|';
const EMPTY: &str = "  ";
const PATH: &str = "::";
const START: &str = "S ";
const END: &str = "E ";

/// Outer wall of a border cell, first match of `preference` wins.
fn border_wall(pos: Dims, size: Dims, preference: [CellWall; 4]) -> Option<CellWall> {
    preference.into_iter().find(|wall| match wall {
        CellWall::West => pos.0 == 0,
        CellWall::East => pos.0 == size.0 - 1,
        CellWall::North => pos.1 == 0,
        CellWall::South => pos.1 == size.1 - 1,
    })
}

/// Text rendering of a maze, with an optional path drawn over it.
pub struct TextRenderer<'a> {
    maze: &'a Maze,
    settings: &'a RenderSettings,
    path: Array2D<bool>,
    start: Dims,
    end: Dims,
    hidden: Vec<(Dims, CellWall)>,
}

impl<'a> TextRenderer<'a> {
    pub fn new(maze: &'a Maze, path: Option<&[Dims]>, settings: &'a RenderSettings) -> Self {
        let size = maze.size();
        let mut on_path = Array2D::new(false, size.0 as usize, size.1 as usize);
        for pos in path.unwrap_or_default() {
            if let Some(cell) = on_path.get_mut(*pos) {
                *cell = true;
            }
        }

        let start = path.and_then(|p| p.first().copied()).unwrap_or(maze.entry());
        let end = path.and_then(|p| p.last().copied()).unwrap_or(maze.exit());

        use CellWall::*;
        let hidden = if settings.get_open_ends() {
            [
                border_wall(maze.entry(), size, [West, North, South, East])
                    .map(|wall| (maze.entry(), wall)),
                border_wall(maze.exit(), size, [South, East, North, West])
                    .map(|wall| (maze.exit(), wall)),
            ]
            .into_iter()
            .flatten()
            .collect()
        } else {
            Vec::new()
        };

        Self {
            maze,
            settings,
            path: on_path,
            start,
            end,
            hidden,
        }
    }

    fn walls(&self, pos: Dims) -> Walls {
        let mut walls = self.maze.walls(pos.0, pos.1).unwrap_or(Walls::ALL);
        for &(hidden_pos, wall) in &self.hidden {
            if hidden_pos == pos {
                walls.set(wall, false);
            }
        }
        walls
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.settings.get_color() {
            text.with(color.into()).to_string()
        } else {
            text.to_string()
        }
    }

    fn cell_content(&self, pos: Dims) -> String {
        let markers = self.settings.get_markers();
        if markers && pos == self.start {
            self.paint(START, self.settings.get_start_color())
        } else if markers && pos == self.end {
            self.paint(END, self.settings.get_end_color())
        } else if self.path.get(pos).copied().unwrap_or(false) {
            self.paint(PATH, self.settings.get_path_color())
        } else {
            EMPTY.to_string()
        }
    }

    pub fn render(&self) -> String {
        let Dims(w, h) = self.maze.size();
        let mut out = String::new();

        out.push(CORNER);
        for x in 0..w {
            let open = !self.walls(Dims(x, 0)).north;
            out.push_str(if open { EMPTY } else { H_WALL });
            out.push(CORNER);
        }
        out.push('\n');

        for y in 0..h {
            let first = self.walls(Dims(0, y));
            out.push(if first.west { V_WALL } else { ' ' });
            for x in 0..w {
                let pos = Dims(x, y);
                out.push_str(&self.cell_content(pos));
                out.push(if self.walls(pos).east { V_WALL } else { ' ' });
            }
            out.push('\n');

            out.push(CORNER);
            for x in 0..w {
                out.push_str(if self.walls(Dims(x, y)).south { H_WALL } else { EMPTY });
                out.push(CORNER);
            }
            out.push('\n');
        }

        out
    }
}

/// Live cells as `#`, one character per cell.
pub fn render_board(board: &Array2D<bool>) -> String {
    let Dims(w, h) = board.size();
    let mut out = String::with_capacity(((w + 1) * h).max(0) as usize);
    for y in 0..h {
        for x in 0..w {
            out.push(if board[Dims(x, y)] { '#' } else { ' ' });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use pmaze::algorithms::seeded_rng;

    use super::*;

    fn plain() -> RenderSettings {
        RenderSettings {
            open_ends: Some(false),
            markers: Some(false),
            ..Default::default()
        }
        .set_color(false)
    }

    #[test]
    fn single_row_corridor() {
        let (_, mut rng) = seeded_rng(Some(0));
        let maze = Maze::build(3, 1, Dims::ZERO, &mut rng).unwrap();
        let settings = plain();

        let text = TextRenderer::new(&maze, None, &settings).render();
        assert_eq!(text, "+--+--+--+\n|        |\n+--+--+--+\n");
    }

    #[test]
    fn open_ends_and_markers() {
        let (_, mut rng) = seeded_rng(Some(0));
        let maze = Maze::build(2, 1, Dims::ZERO, &mut rng).unwrap();
        let settings = RenderSettings {
            open_ends: Some(true),
            markers: Some(true),
            ..Default::default()
        }
        .set_color(false);

        let text = TextRenderer::new(&maze, maze.solution(), &settings).render();
        assert_eq!(text, "+--+--+\n S  E |\n+--+  +\n");
    }

    #[test]
    fn path_is_drawn() {
        let (_, mut rng) = seeded_rng(Some(4));
        let mut maze = Maze::build(4, 4, Dims::ZERO, &mut rng).unwrap();
        let path = maze.solve(Dims(0, 0), Dims(3, 3)).unwrap();
        let settings = plain();

        let text = TextRenderer::new(&maze, Some(path.as_slice()), &settings).render();
        assert_eq!(text.matches(PATH).count(), path.len());
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().all(|line| line.len() == 13));
    }

    #[test]
    fn board_rendering() {
        let mut board = Array2D::new(false, 3, 2);
        board[Dims(0, 0)] = true;
        board[Dims(2, 1)] = true;
        assert_eq!(render_board(&board), "#  \n  #\n");
    }
}
