//! LifeView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Session;
use crate::fb::{FrameBuffer, Rgb, Style};

/// Rows reserved at the bottom of the terminal for the status line.
pub const HUD_ROWS: u16 = 1;

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

    /// Height of the simulation area (everything above the HUD).
    pub fn sim_height(&self) -> u16 {
        self.height.saturating_sub(HUD_ROWS)
    }
}

pub struct LifeView {
    alive: Style,
    background: Style,
    hud: Style,
    alive_ch: char,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            alive: Style::new(Rgb::new(0, 255, 0), Rgb::new(0, 0, 0)),
            background: Style::new(Rgb::new(60, 60, 60), Rgb::new(0, 0, 0)),
            hud: Style::new(Rgb::new(230, 230, 230), Rgb::new(100, 100, 100)),
            alive_ch: '█',
        }
    }
}

impl LifeView {
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.background.glyph(' '));

        let sim_w = viewport.width as i32;
        let sim_h = viewport.sim_height() as i32;
        let glyph = self.alive.glyph(self.alive_ch);
        for rect in session.visible_cells() {
            if !rect.intersects_view(sim_w, sim_h) {
                continue;
            }
            // Clip to the sim area so cells never paint over the HUD.
            let h = rect.side.min(sim_h - rect.y);
            fb.fill_rect(rect.x, rect.y, rect.side, h, glyph);
        }

        self.draw_hud(session, viewport, fb);
    }

    fn draw_hud(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        if viewport.height < HUD_ROWS {
            return;
        }
        let y = (viewport.height - HUD_ROWS) as i32;
        fb.fill_rect(0, y, viewport.width as i32, HUD_ROWS as i32, self.hud.glyph(' '));

        let status = session.status();
        let state = if status.running { "RUN" } else { "PAUSE" };
        let line = match session.message() {
            Some(message) => format!(" {}  gen {}  | {}", state, status.generation, message),
            None => format!(
                " {}  gen {}  pop {}  zoom {}  [{}]  | space run  n step  r rand  c clear  g glider  p/s pattern  w save  q quit",
                state, status.generation, status.population, status.cell_size, status.pattern
            ),
        };
        fb.put_str(0, y, &line, self.hud.bold());
    }
}
