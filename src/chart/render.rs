// src/chart/render.rs
//
// Rasterizes a `ChartSpec` onto an RGBA canvas and writes it as PNG.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use super::font::{glyph, text_height, text_width, ADVANCE, GLYPH_W};
use super::layout::{tick_label, ChartSpec, Rgb, BAR_WIDTH, LABEL_OFFSET};
use crate::config::options::ChartOptions;
use crate::error::{Error, Result};
use crate::file;

const WHITE: Rgb = [255, 255, 255];
const BLACK: Rgb = [0, 0, 0];
const GRID: Rgb = [176, 176, 176];
const LEGEND_EDGE: Rgb = [204, 204, 204];

const TEXT_SCALE: u32 = 2;
const TITLE_SCALE: u32 = 3;

/// Pixel margins around the plot area.
struct Margins { left: u32, right: u32, top: u32, bottom: u32 }

const MARGINS: Margins = Margins { left: 80, right: 24, top: 56, bottom: 72 };

/// Maps data coordinates into the plot area.
struct Frame {
    x0: f64, x1: f64,
    y0: f64, y1: f64,
    left: f64, right: f64,
    top: f64, bottom: f64,
}

impl Frame {
    fn px(&self, x: f64) -> f64 {
        self.left + (x - self.x0) / (self.x1 - self.x0) * (self.right - self.left)
    }
    // halved so a range spanning most of f64 does not overflow
    fn py(&self, y: f64) -> f64 {
        self.bottom - (y / 2.0 - self.y0 / 2.0) / (self.y1 / 2.0 - self.y0 / 2.0) * (self.bottom - self.top)
    }
}

pub fn render(spec: &ChartSpec, size: &ChartOptions) -> RgbaImage {
    let (w, h) = (size.width.max(200), size.height.max(150));
    let mut img = RgbaImage::from_pixel(w, h, rgba(WHITE));

    let (x0, x1) = spec.x_range();
    let (y0, y1) = spec.y_range();
    let f = Frame {
        x0, x1, y0, y1,
        left: MARGINS.left as f64,
        right: (w - MARGINS.right) as f64,
        top: MARGINS.top as f64,
        bottom: (h - MARGINS.bottom) as f64,
    };

    // dashed grid + y tick labels
    for t in spec.y_ticks() {
        let y = f.py(t).round() as i64;
        dashed_hline(&mut img, f.left as i64, f.right as i64, y, GRID, 0.5);
        let label = tick_label(t);
        let lw = text_width(&label, TEXT_SCALE) as i64;
        draw_text(&mut img, &label, f.left as i64 - 8 - lw, y - (text_height(TEXT_SCALE) / 2) as i64, TEXT_SCALE, BLACK);
        fill_rect(&mut img, f.left as i64 - 5, y, f.left as i64, y + 1, BLACK);
    }

    // bars + value labels
    for bar in spec.bars() {
        let series = &spec.series[bar.series];
        let xa = f.px(bar.center - BAR_WIDTH / 2.0).round() as i64;
        let xb = f.px(bar.center + BAR_WIDTH / 2.0).round() as i64;
        let (ya, yb) = (f.py(bar.height.max(0.0)), f.py(bar.height.min(0.0)));
        fill_rect(&mut img, xa, ya.round() as i64, xb, yb.round() as i64, series.fill);

        let lw = text_width(&bar.label, TEXT_SCALE) as i64;
        let ly = f.py(bar.height.max(0.0) + LABEL_OFFSET).round() as i64 - text_height(TEXT_SCALE) as i64;
        let lx = f.px(bar.center).round() as i64 - lw / 2;
        draw_text(&mut img, &bar.label, lx, ly, TEXT_SCALE, series.label);
    }

    // axes
    fill_rect(&mut img, f.left as i64, f.top as i64, f.left as i64 + 1, f.bottom as i64 + 1, BLACK);
    fill_rect(&mut img, f.left as i64, f.bottom as i64, f.right as i64 + 1, f.bottom as i64 + 1, BLACK);

    // x ticks + season labels
    for (x, label) in spec.ticks() {
        let px = f.px(x).round() as i64;
        fill_rect(&mut img, px, f.bottom as i64, px + 1, f.bottom as i64 + 5, BLACK);
        let lw = text_width(label, TEXT_SCALE) as i64;
        draw_text(&mut img, label, px - lw / 2, f.bottom as i64 + 10, TEXT_SCALE, BLACK);
    }

    // axis titles
    let xl = text_width(&spec.x_label, TEXT_SCALE) as i64;
    let mid_x = ((f.left + f.right) / 2.0) as i64;
    draw_text(&mut img, &spec.x_label, mid_x - xl / 2, h as i64 - 28, TEXT_SCALE, BLACK);
    let yl = text_width(&spec.y_label, TEXT_SCALE) as i64;
    let mid_y = ((f.top + f.bottom) / 2.0) as i64;
    draw_text_up(&mut img, &spec.y_label, 14, mid_y + yl / 2, TEXT_SCALE, BLACK);

    // title
    let tw = text_width(&spec.title, TITLE_SCALE) as i64;
    draw_text(&mut img, &spec.title, w as i64 / 2 - tw / 2, 18, TITLE_SCALE, BLACK);

    draw_legend(&mut img, spec, &f);
    img
}

/// Render and write the chart as PNG, creating parent directories.
pub fn save_png(spec: &ChartSpec, size: &ChartOptions, path: &Path) -> Result<()> {
    file::ensure_parent(path)?;
    render(spec, size)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Render { path: path.to_path_buf(), source })
}

/// Boxed legend in the upper-left corner of the plot area.
fn draw_legend(img: &mut RgbaImage, spec: &ChartSpec, f: &Frame) {
    let pad = 8i64;
    let swatch = 24i64;
    let row_h = text_height(TEXT_SCALE) as i64 + 8;
    let text_w = spec.series.iter().map(|s| text_width(&s.name, TEXT_SCALE)).max().unwrap_or(0) as i64;

    let x = f.left as i64 + 12;
    let y = f.top as i64 + 8;
    let w = pad * 3 + swatch + text_w;
    let h = pad * 2 + row_h * spec.series.len() as i64 - 8;

    fill_rect(img, x, y, x + w, y + h, WHITE);
    stroke_rect(img, x, y, x + w, y + h, LEGEND_EDGE);

    for (i, s) in spec.series.iter().enumerate() {
        let ry = y + pad + row_h * i as i64;
        fill_rect(img, x + pad, ry + 2, x + pad + swatch, ry + row_h - 10, s.fill);
        draw_text(img, &s.name, x + pad * 2 + swatch, ry, TEXT_SCALE, BLACK);
    }
}

/* ---------------- primitives ---------------- */

fn rgba(c: Rgb) -> Rgba<u8> {
    Rgba([c[0], c[1], c[2], 255])
}

fn put(img: &mut RgbaImage, x: i64, y: i64, c: Rgb) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, rgba(c));
    }
}

fn blend(img: &mut RgbaImage, x: i64, y: i64, c: Rgb, alpha: f32) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() { return; }
    let px = img.get_pixel_mut(x as u32, y as u32);
    for i in 0..3 {
        let under = px.0[i] as f32;
        px.0[i] = (under + (c[i] as f32 - under) * alpha).round() as u8;
    }
}

/// Fill the half-open box [x0, x1) × [y0, y1); corners may come in any order.
fn fill_rect(img: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, c: Rgb) {
    let (xa, xb) = (x0.min(x1), x0.max(x1));
    let (ya, yb) = (y0.min(y1), y0.max(y1));
    for y in ya..yb {
        for x in xa..xb {
            put(img, x, y, c);
        }
    }
}

fn stroke_rect(img: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, c: Rgb) {
    fill_rect(img, x0, y0, x1, y0 + 1, c);
    fill_rect(img, x0, y1 - 1, x1, y1, c);
    fill_rect(img, x0, y0, x0 + 1, y1, c);
    fill_rect(img, x1 - 1, y0, x1, y1, c);
}

fn dashed_hline(img: &mut RgbaImage, x0: i64, x1: i64, y: i64, c: Rgb, alpha: f32) {
    const DASH: i64 = 6;
    const GAP: i64 = 4;
    for x in x0..x1 {
        if (x - x0) % (DASH + GAP) < DASH {
            blend(img, x, y, c, alpha);
        }
    }
}

/// Left-to-right text with its top-left corner at (x, y).
fn draw_text(img: &mut RgbaImage, text: &str, x: i64, y: i64, scale: u32, c: Rgb) {
    let s = scale as i64;
    for (i, ch) in text.chars().enumerate() {
        let ox = x + (i as i64) * (ADVANCE as i64) * s;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_W {
                if (bits >> (GLYPH_W - 1 - col)) & 1 != 0 {
                    let px = ox + col as i64 * s;
                    let py = y + row as i64 * s;
                    fill_rect(img, px, py, px + s, py + s, c);
                }
            }
        }
    }
}

/// Bottom-to-top text (rotated 90° counter-clockwise); (x, y) is the
/// bottom-left corner of the first glyph.
fn draw_text_up(img: &mut RgbaImage, text: &str, x: i64, y: i64, scale: u32, c: Rgb) {
    let s = scale as i64;
    for (i, ch) in text.chars().enumerate() {
        let oy = y - (i as i64) * (ADVANCE as i64) * s;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_W {
                if (bits >> (GLYPH_W - 1 - col)) & 1 != 0 {
                    let px = x + row as i64 * s;
                    let py = oy - (col as i64 + 1) * s;
                    fill_rect(img, px, py, px + s, py + s, c);
                }
            }
        }
    }
}
