//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::leaderboard::{ranked, FetchState, Standings};
use crate::types::{Coord, Phase, RewardTier};

const BOARD_BG: Rgb = Rgb::new(24, 28, 36);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const SNAKE_FG: Rgb = Rgb::new(70, 190, 90);
const SNAKE_HEAD_FG: Rgb = Rgb::new(140, 240, 150);
const ROW_SHADE_BG: Rgb = Rgb::new(20, 40, 70);

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

/// Presentation state that lives outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    /// Name typed so far at the start prompt.
    pub name_input: &'a str,
    /// One-line message under the prompt, e.g. a rejected name.
    pub notice: Option<&'a str>,
    /// `None` when the leaderboard client is turned off.
    pub leaderboard: Option<&'a Standings>,
}

impl Default for HudView<'_> {
    fn default() -> Self {
        Self {
            name_input: "",
            notice: None,
            leaderboard: None,
        }
    }
}

/// Food colour for a reward tier.
pub fn tier_color(tier: RewardTier) -> Rgb {
    match tier {
        RewardTier::Common => Rgb::new(220, 60, 60),
        RewardTier::Uncommon => Rgb::new(170, 80, 220),
        RewardTier::Rare => Rgb::new(70, 120, 235),
    }
}

/// Where the board landed in the last layout, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardArea {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board placement for a snapshot in a viewport.
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardArea {
        let frame_w = snap.board_size * self.cell_w + 2;
        let frame_h = snap.board_size * self.cell_h + 2;
        let panel_w = 28;
        let total_w = frame_w + panel_w;
        BoardArea {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let area = self.layout(snap, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, area, border);

        for row in 0..snap.board_size {
            for col in 0..snap.board_size {
                let style = CellStyle::new(Rgb::new(70, 75, 90), BOARD_BG).dim();
                self.fill_cell(fb, area, row, col, '·', style);
            }
        }

        if let Some(food) = snap.food {
            let style = CellStyle::new(tier_color(snap.food_tier), BOARD_BG).bold();
            self.draw_coord(fb, area, snap, food, '█', style);
        }

        // Tail first so the head wins if anything overlaps.
        for (i, &coord) in snap.snake.iter().enumerate().rev() {
            let style = if i == 0 {
                CellStyle::new(SNAKE_HEAD_FG, BOARD_BG).bold()
            } else {
                CellStyle::new(SNAKE_FG, BOARD_BG)
            };
            self.draw_coord(fb, area, snap, coord, '█', style);
        }

        self.draw_side_panel(fb, snap, hud, viewport, area);

        match snap.phase {
            Phase::NotStarted => self.draw_start_menu(fb, area, hud),
            Phase::Paused => self.draw_menu(
                fb,
                area,
                &[("Game is Paused", title_style()), ("P: resume", hint_style())],
            ),
            Phase::GameOver => self.draw_game_over(fb, snap, area),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, area: BoardArea, style: CellStyle) {
        let BoardArea {
            x,
            y,
            frame_w: w,
            frame_h: h,
        } = area;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_coord(&self, fb: &mut FrameBuffer, area: BoardArea, snap: &GameSnapshot, coord: Coord, ch: char, style: CellStyle) {
        let size = snap.board_size as i32;
        if coord.row < 0 || coord.col < 0 || coord.row >= size || coord.col >= size {
            return;
        }
        self.fill_cell(fb, area, coord.row as u16, coord.col as u16, ch, style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, area: BoardArea, row: u16, col: u16, ch: char, style: CellStyle) {
        let px = area.x + 1 + col * self.cell_w;
        let py = area.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        area: BoardArea,
    ) {
        let panel_x = area.x.saturating_add(area.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }
        let panel_w = viewport.width - panel_x;

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = area.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_int(panel_x + 7, y, snap.score as i64, value);
        y += 1;
        fb.put_str(panel_x, y, "SPEED", label);
        let end = fb.put_int(panel_x + 7, y, snap.speed_tier as i64, value);
        let dim = value.dim();
        let end = fb.put_str(end + 1, y, "(", dim);
        let end = fb.put_int(end, y, snap.tick_interval_ms as i64, dim);
        fb.put_str(end, y, "ms)", dim);
        y += 1;
        fb.put_str(panel_x, y, "FOOD", label);
        let food = CellStyle::new(tier_color(snap.food_tier), PANEL_BG).bold();
        let end = fb.put_str(panel_x + 7, y, "██", food);
        let end = fb.put_str(end + 1, y, snap.food_tier.as_str(), value);
        fb.put_str(end + 1, y, "+", dim);
        fb.put_int(end + 2, y, snap.food_tier.points() as i64, dim);
        y += 1;
        if !snap.player_name.is_empty() {
            fb.put_str(panel_x, y, "PLAYER", label);
            fb.put_str(panel_x + 7, y, &snap.player_name, value);
        }
        y += 2;

        self.draw_leaderboard(fb, hud.leaderboard, panel_x, y, panel_w, viewport.height);
    }

    fn draw_leaderboard(
        &self,
        fb: &mut FrameBuffer,
        standings: Option<&Standings>,
        x: u16,
        mut y: u16,
        width: u16,
        bottom: u16,
    ) {
        let title = CellStyle::new(Rgb::new(255, 170, 60), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let end = fb.put_str(x, y, "LEADERBOARD", title);
        let Some(standings) = standings else {
            fb.put_str(x, y + 1, "offline", value.dim());
            return;
        };
        // The hint sits beside the title so older rows stay visible.
        let hint = match standings.fetch_state() {
            FetchState::Idle => "",
            FetchState::Loading => "loading...",
            FetchState::Failed => "unavailable",
        };
        fb.put_str(end + 1, y, hint, value.dim());
        y += 1;

        let Some(entries) = standings.entries() else {
            return;
        };

        let score_x = x + width.saturating_sub(7).min(20);
        let header = CellStyle::new(Rgb::new(255, 170, 60), PANEL_BG);
        fb.put_str(x, y, "#", header);
        fb.put_str(x + 4, y, "NAME", header);
        fb.put_str(score_x, y, "SCORE", header);
        y += 1;

        for (i, row) in ranked(entries).enumerate() {
            if y >= bottom {
                break;
            }
            // Alternate rows get a blue shade.
            let style = if i % 2 == 1 {
                CellStyle::new(Rgb::new(220, 220, 220), ROW_SHADE_BG)
            } else {
                value
            };
            fb.fill_rect(x, y, width, 1, ' ', style);
            fb.put_int(x, y, row.rank as i64, style);
            let name_w = score_x.saturating_sub(x + 5) as usize;
            for (dx, ch) in row.entry.player_name.chars().take(name_w).enumerate() {
                fb.put_char(x + 4 + dx as u16, y, ch, style);
            }
            fb.put_int(score_x, y, row.entry.score, style);
            y += 1;
        }

        if entries.is_empty() {
            fb.put_str(x, y, "no scores yet", value.dim());
        }
    }

    fn draw_start_menu(&self, fb: &mut FrameBuffer, area: BoardArea, hud: &HudView<'_>) {
        let prompt: String = "> "
            .chars()
            .chain(hud.name_input.chars())
            .chain(std::iter::once('_'))
            .take(24)
            .collect();

        let notice = hud.notice.unwrap_or("");
        self.draw_menu(
            fb,
            area,
            &[
                ("Enter your name", title_style()),
                (prompt.as_str(), CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG)),
                ("Enter: start game", hint_style()),
                (notice, CellStyle::new(Rgb::new(255, 110, 110), PANEL_BG)),
            ],
        );
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, area: BoardArea) {
        let mut result = String::with_capacity(24);
        result.push_str("Your Result: ");
        result.push_str(&snap.score.to_string());
        self.draw_menu(
            fb,
            area,
            &[
                (snap.player_name.as_str(), title_style()),
                (result.as_str(), title_style()),
                ("R: try again", hint_style()),
            ],
        );
    }

    /// Centered box over the board with one line per entry.
    fn draw_menu(&self, fb: &mut FrameBuffer, area: BoardArea, lines: &[(&str, CellStyle)]) {
        let text_w = lines
            .iter()
            .map(|(s, _)| s.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let box_w = (text_w + 4).min(area.frame_w);
        let box_h = (lines.len() as u16 + 2).min(area.frame_h);
        let box_x = area.x + (area.frame_w - box_w) / 2;
        let box_y = area.y + (area.frame_h - box_h) / 2;

        fb.fill_rect(box_x, box_y, box_w, box_h, ' ', CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG));
        for (i, (text, style)) in lines.iter().enumerate() {
            let w = text.chars().count() as u16;
            let x = box_x + box_w.saturating_sub(w) / 2;
            fb.put_str(x, box_y + 1 + i as u16, text, *style);
        }
    }
}

fn title_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold()
}

fn hint_style() -> CellStyle {
    CellStyle::new(Rgb::new(170, 170, 170), PANEL_BG)
}
