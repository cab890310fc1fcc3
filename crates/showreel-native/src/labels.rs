//! Label text rasterized once at startup into a single-channel atlas, one
//! row per item. Without a font the rows stay empty and labels show as plates.

use fontdue::{Font, FontSettings};
use showreel_core::{Item, ItemId};

pub const ROW_WIDTH: u32 = 512;
/// Rows keep the 2:1 shape of the label quad.
pub const ROW_HEIGHT: u32 = 256;
/// 32 rows of 256 px fit the default 8192 px texture limit.
const MAX_ROWS: u32 = 32;

const TITLE_PX: f32 = 64.0;
const SUBTITLE_PX: f32 = 34.0;
const CATEGORY_PX: f32 = 26.0;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// `SHOWREEL_FONT` first, then a few common system locations.
pub fn load_font() -> Option<Font> {
    let from_env = std::env::var("SHOWREEL_FONT").ok();
    let candidates = from_env
        .iter()
        .map(String::as_str)
        .chain(FONT_CANDIDATES.iter().copied());
    for path in candidates {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match Font::from_bytes(bytes, FontSettings::default()) {
            Ok(font) => {
                log::info!("[labels] font {path}");
                return Some(font);
            }
            Err(e) => log::warn!("[labels] cannot parse {path}: {e}"),
        }
    }
    log::warn!("[labels] no font found (set SHOWREEL_FONT); labels render as plain plates");
    None
}

pub struct LabelAtlas {
    rows: u32,
    /// Coverage, `ROW_WIDTH` bytes per line, rows stacked top to bottom.
    pixels: Vec<u8>,
}

impl LabelAtlas {
    pub fn build(font: Option<&Font>, items: &[Item]) -> Self {
        let rows = (items.len() as u32).clamp(1, MAX_ROWS);
        let mut atlas = Self {
            rows,
            pixels: vec![0; (ROW_WIDTH * ROW_HEIGHT * rows) as usize],
        };
        if let Some(font) = font {
            for item in items {
                let Some(row) = atlas.row_for(item.id) else {
                    log::debug!("[labels] no atlas row for item {}", item.id);
                    continue;
                };
                atlas.draw_line(font, row, &item.meta.client, TITLE_PX, 0.42);
                atlas.draw_line(font, row, &item.meta.subtitle, SUBTITLE_PX, 0.66);
                atlas.draw_line(font, row, &item.meta.category, CATEGORY_PX, 0.86);
            }
        }
        atlas
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn height(&self) -> u32 {
        self.rows * ROW_HEIGHT
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn row_for(&self, item: ItemId) -> Option<u32> {
        let row = u32::try_from(item).ok()?;
        (row < self.rows).then_some(row)
    }

    /// Centered line whose baseline sits at `baseline` (fraction of the row height).
    fn draw_line(&mut self, font: &Font, row: u32, text: &str, px: f32, baseline: f32) {
        let width: f32 = text.chars().map(|c| font.metrics(c, px).advance_width).sum();
        let mut pen_x = ((ROW_WIDTH as f32 - width) * 0.5).max(0.0);
        let top = (row * ROW_HEIGHT) as i32;
        let baseline_y = top as f32 + ROW_HEIGHT as f32 * baseline;
        for c in text.chars() {
            let (m, bitmap) = font.rasterize(c, px);
            let x0 = (pen_x + m.xmin as f32).round() as i32;
            let y0 = (baseline_y - (m.ymin as f32 + m.height as f32)).round() as i32;
            for (j, line) in bitmap.chunks(m.width.max(1)).enumerate() {
                let y = y0 + j as i32;
                if y < top || y >= top + ROW_HEIGHT as i32 {
                    continue;
                }
                for (i, &coverage) in line.iter().enumerate() {
                    let x = x0 + i as i32;
                    if x < 0 || x >= ROW_WIDTH as i32 {
                        continue;
                    }
                    let idx = y as usize * ROW_WIDTH as usize + x as usize;
                    self.pixels[idx] = self.pixels[idx].max(coverage);
                }
            }
            pen_x += m.advance_width;
        }
    }
}
