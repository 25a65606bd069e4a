pub mod theme;

use crossterm::style::{Color, Stylize};

use crate::{
    maze::{Coord, Direction, Maze},
    solvers::Solution,
};
pub use theme::{Theme, ThemeKind};

/// Width of every tile, in terminal columns.
pub const TILE_WIDTH: usize = 2;

/// What occupies one position of the drawing.
///
/// The drawing is `2 * width + 1` tiles across and `2 * height + 1` tiles down: cells sit
/// at odd positions, the walls between them at the even positions around them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    Wall,
    Floor,
    Entrance,
    Exit,
    Player,
    /// Part of the solution overlay, with its position along the route in `0.0..=1.0`.
    Route(f32),
}

impl Tile {
    fn plain(self) -> &'static str {
        match self {
            Tile::Wall => "##",
            Tile::Floor => "  ",
            Tile::Entrance => "S ",
            Tile::Exit => "E ",
            Tile::Player => "@ ",
            Tile::Route(_) => "**",
        }
    }

    fn styled(self, theme: &Theme) -> String {
        let content = match self {
            Tile::Wall => "██".with(theme.wall).on(theme.background),
            Tile::Floor => "  ".on(theme.floor),
            Tile::Entrance => "  ".on(theme.entrance),
            Tile::Exit => "  ".on(theme.exit),
            Tile::Player => "██".with(theme.player).on(theme.floor),
            Tile::Route(t) => "██".with(route_color(t)).on(theme.floor),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                content.content().width(),
                TILE_WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        content.to_string()
    }
}

/// Color ramp along the route: red rises, green falls, blue peaks halfway.
pub fn route_color(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let r = t * 255.0;
    let g = 255.0 - t * 255.0;
    let b = 255.0 - (255.0 * (t - 0.5)).abs();
    Color::Rgb {
        r: r.round() as u8,
        g: g.round() as u8,
        b: b.round() as u8,
    }
}

/// Lays the maze out as rows of tiles.
///
/// The solution overlay covers the route cells and the passages between them; entrance,
/// exit and player tiles are drawn on top of it.
pub fn layout(maze: &Maze, solution: Option<&Solution>, player: Option<Coord>) -> Vec<Vec<Tile>> {
    let cols = maze.width() as usize * 2 + 1;
    let rows = maze.height() as usize * 2 + 1;
    let mut tiles = vec![vec![Tile::Wall; cols]; rows];
    let center = |(x, y): Coord| (x as usize * 2 + 1, y as usize * 2 + 1);

    for (coord, cell) in maze.cells() {
        let (cx, cy) = center(coord);
        tiles[cy][cx] = Tile::Floor;
        if !cell.has_wall(Direction::Right) {
            tiles[cy][cx + 1] = Tile::Floor;
        }
        if !cell.has_wall(Direction::Down) {
            tiles[cy + 1][cx] = Tile::Floor;
        }
        // Left and top only matter on the outer edge, inner ones mirror a neighbor's
        if coord.0 == 0 && !cell.has_wall(Direction::Left) {
            tiles[cy][cx - 1] = Tile::Floor;
        }
        if coord.1 == 0 && !cell.has_wall(Direction::Up) {
            tiles[cy - 1][cx] = Tile::Floor;
        }
    }

    if let Some(solution) = solution {
        let steps = solution.len().saturating_sub(1).max(1) as f32;
        for (i, (from, to)) in solution.segments().enumerate() {
            let (fx, fy) = center(from);
            let (tx, ty) = center(to);
            tiles[fy][fx] = Tile::Route(i as f32 / steps);
            tiles[(fy + ty) / 2][(fx + tx) / 2] = Tile::Route((i as f32 + 0.5) / steps);
            tiles[ty][tx] = Tile::Route((i + 1) as f32 / steps);
        }
    }

    for (coord, cell) in maze.cells() {
        let (cx, cy) = center(coord);
        if cell.is_exit() {
            tiles[cy][cx] = Tile::Exit;
        } else if cell.is_entrance() {
            tiles[cy][cx] = Tile::Entrance;
        }
    }

    if let Some(coord) = player.filter(|&c| maze.is_in_bounds(c)) {
        let (cx, cy) = center(coord);
        tiles[cy][cx] = Tile::Player;
    }

    tiles
}

/// Draws the maze with the theme's colors, one line per tile row.
pub fn draw(maze: &Maze, solution: Option<&Solution>, player: Option<Coord>, theme: &Theme) -> String {
    render_rows(&layout(maze, solution, player), |tile| tile.styled(theme))
}

/// Draws the maze in plain ASCII, without any terminal styling.
pub fn draw_plain(maze: &Maze, solution: Option<&Solution>, player: Option<Coord>) -> String {
    render_rows(&layout(maze, solution, player), |tile| tile.plain().to_string())
}

fn render_rows(tiles: &[Vec<Tile>], glyph: impl Fn(Tile) -> String) -> String {
    tiles
        .iter()
        .map(|row| row.iter().map(|&t| glyph(t)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
