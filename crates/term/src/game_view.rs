//! GameView: draws an engine `GameSnapshot` into a framebuffer.
//!
//! Pure: no terminal I/O, so layout is unit-testable.

use crate::engine::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200));
const EMPTY: CellStyle = CellStyle::plain(Rgb::new(90, 90, 100)).on(WELL_BG).dim();
const LABEL: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200));
const BANNER: CellStyle = CellStyle::plain(Rgb::new(255, 255, 255)).bold();

const BLOCK: char = '█';
const DOT: char = '·';

/// Minimum columns the side panel needs before it is drawn.
const PANEL_MIN_WIDTH: u16 = 10;

/// Screen placement of the well for one frame.
#[derive(Debug, Clone, Copy)]
struct Layout {
    /// Top-left corner of the border.
    x: u16,
    y: u16,
    /// Border size, including the border itself.
    w: u16,
    h: u16,
    cell_w: u16,
    cell_h: u16,
}

impl Layout {
    fn centered(snap: &GameSnapshot, viewport: Viewport, cell_w: u16, cell_h: u16) -> Self {
        let w = snap.width as u16 * cell_w + 2;
        let h = snap.height as u16 * cell_h + 2;
        Self {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
            cell_w,
            cell_h,
        }
    }

    /// Screen position of board cell (row, col).
    fn cell_origin(&self, row: u16, col: u16) -> (u16, u16) {
        (
            self.x + 1 + col * self.cell_w,
            self.y + 1 + row * self.cell_h,
        )
    }
}

/// Draws the well, the falling piece, the score panel and the game-over banner.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square in most fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Draw `snap` into `fb`, resizing it to the viewport first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = Layout::centered(snap, viewport, self.cell_w, self.cell_h);
        draw_border(fb, &layout);

        for row in 0..snap.height {
            for col in 0..snap.width {
                let (ch, style) = match snap.cell(row as i16, col as i16) {
                    Some(Some(color)) => (BLOCK, block_style(color)),
                    _ => (DOT, EMPTY),
                };
                paint_cell(fb, &layout, row as u16, col as u16, ch, style);
            }
        }

        if let Some(active) = &snap.active {
            for &(row, col) in &active.cells {
                let visible = (0..snap.height as i16).contains(&row) && (0..snap.width as i16).contains(&col);
                if visible {
                    paint_cell(fb, &layout, row as u16, col as u16, BLOCK, block_style(active.color));
                }
            }
        }

        draw_panel(fb, snap, viewport, &layout);

        if snap.game_over {
            draw_banner(fb, &layout, "GAME OVER", 0);
            draw_banner(fb, &layout, "r: restart", 2);
        }
    }

    /// Like `render_into`, allocating a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

fn block_style(color: Color) -> CellStyle {
    CellStyle::plain(color.into()).on(WELL_BG).bold()
}

fn paint_cell(fb: &mut FrameBuffer, layout: &Layout, row: u16, col: u16, ch: char, style: CellStyle) {
    let (x, y) = layout.cell_origin(row, col);
    fb.fill_rect(x, y, layout.cell_w, layout.cell_h, ch, style);
}

fn draw_border(fb: &mut FrameBuffer, layout: &Layout) {
    let Layout { x, y, w, h, .. } = *layout;
    let (right, bottom) = (x + w - 1, y + h - 1);

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', BORDER);
        fb.put_char(cx, bottom, '─', BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', BORDER);
        fb.put_char(right, cy, '│', BORDER);
    }
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
}

/// Score, lines, play time and fall interval to the right of the well.
fn draw_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &Layout) {
    let x = layout.x.saturating_add(layout.w).saturating_add(2);
    if viewport.width.saturating_sub(x) < PANEL_MIN_WIDTH {
        return;
    }

    let mut y = layout.y;
    let mut section = |fb: &mut FrameBuffer, label: &str, value: &dyn Fn(&mut FrameBuffer, u16)| {
        fb.put_str(x, y, label, LABEL);
        value(fb, y + 1);
        y += 3;
    };

    section(fb, "SCORE", &|fb, vy| {
        fb.put_number(x, vy, snap.score as u64, 0, VALUE);
    });
    section(fb, "LINES", &|fb, vy| {
        fb.put_number(x, vy, snap.lines as u64, 0, VALUE);
    });
    section(fb, "TIME", &|fb, vy| {
        let secs = snap.elapsed_ms / 1000;
        let cx = fb.put_number(x, vy, secs / 60, 2, VALUE);
        let cx = fb.put_str(cx, vy, ":", VALUE);
        fb.put_number(cx, vy, secs % 60, 2, VALUE);
    });
    section(fb, "SPEED", &|fb, vy| {
        let cx = fb.put_number(x, vy, snap.fall_interval_ms as u64, 0, VALUE);
        fb.put_str(cx, vy, "ms", VALUE.dim());
    });
}

/// Centered text `line` rows below the middle of the well.
fn draw_banner(fb: &mut FrameBuffer, layout: &Layout, text: &str, line: u16) {
    let text_w = text.chars().count() as u16;
    let x = layout.x + layout.w.saturating_sub(text_w) / 2;
    let y = layout.y + layout.h / 2 + line;
    fb.put_str(x, y, text, BANNER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ActiveSnapshot;
    use crate::types::ShapeKind;

    fn empty_snapshot(width: u8, height: u8) -> GameSnapshot {
        GameSnapshot {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            fall_interval_ms: 500,
            ..GameSnapshot::default()
        }
    }

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .flat_map(|y| fb.row(y).iter().map(|c| c.ch).chain(std::iter::once('\n')))
            .collect()
    }

    #[test]
    fn active_cells_above_top_are_skipped() {
        let mut snap = empty_snapshot(4, 4);
        snap.active = Some(ActiveSnapshot {
            kind: ShapeKind::I,
            color: Color::CYAN,
            cells: [(-1, 0), (0, 0)].into_iter().collect(),
        });

        let fb = GameView::new(1, 1).render(&snap, Viewport::new(6, 6));
        // Frame is 6x6 at the origin; cell (0, 0) sits at (1, 1).
        assert_eq!(fb.get(1, 1).unwrap().ch, BLOCK);
        assert_eq!(fb.get(1, 0).unwrap().ch, '─');
    }

    #[test]
    fn panel_shows_clock_and_speed() {
        let mut snap = empty_snapshot(4, 4);
        snap.elapsed_ms = 125_000;
        let text = screen_text(&GameView::new(1, 1).render(&snap, Viewport::new(30, 20)));

        assert!(text.contains("02:05"));
        assert!(text.contains("500ms"));
    }

    #[test]
    fn panel_hidden_when_viewport_is_narrow() {
        let mut snap = empty_snapshot(4, 4);
        snap.score = 4321;
        let text = screen_text(&GameView::new(1, 1).render(&snap, Viewport::new(12, 8)));

        assert!(!text.contains("SCORE"));
        assert!(!text.contains("4321"));
    }

    #[test]
    fn banner_only_after_game_over() {
        let mut snap = empty_snapshot(10, 6);
        let view = GameView::new(1, 1);
        assert!(!screen_text(&view.render(&snap, Viewport::new(12, 8))).contains("GAME OVER"));

        snap.game_over = true;
        assert!(screen_text(&view.render(&snap, Viewport::new(12, 8))).contains("GAME OVER"));
    }
}
