use std::cell::Cell;

use horae_engine::coords::{Rect, Vec2};
use horae_engine::geom::{rounded_rect, Transform};
use horae_engine::paint::Color;
use horae_engine::text::FontId;
use horae_engine::time::WallTime;

use crate::painter::Painter;
use crate::widget::Widget;

// ── Style ─────────────────────────────────────────────────────────────────

/// Colors of the dial.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockStyle {
    /// Fill behind the dial. On the dial itself it only shows through the
    /// punched hole of the second-hand counterweight ring.
    pub background: Color,
    /// Ticks, labels, hour/minute hands, and the center cap.
    pub face: Color,
    /// Second hand and its counterweight ring.
    pub accent: Color,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            background: Color::from_srgb_u8(0, 0, 0, 255),
            face: Color::from_srgb_u8(255, 255, 255, 255),
            accent: Color::from_srgb_u8(250, 159, 34, 255),
        }
    }
}

// ── Dial proportions (fractions of the dial size) ─────────────────────────

const MINUTE_FONT_FACTOR: f32 = 0.03;
const HOUR_FONT_RATIO: f32 = 3.33;
/// Tick half-length as a fraction of half the minute-label size.
const TICK_SPREAD: f32 = 0.56;
const TICK_ALPHA: f32 = 60.0 / 255.0;
const CENTER_CAP_FACTOR: f32 = 0.04;
/// How far short of the center the hand overlays and the second hand stop.
const HAND_BASE_FACTOR: f32 = 0.06;
const HOUR_HAND_FACTOR: f32 = 0.24;
const MINUTE_HAND_FACTOR: f32 = 0.42;
const HAND_CORE_RATIO: f32 = 0.3;
const HAND_OVERLAY_RATIO: f32 = 0.6;
const SECOND_DISC_RATIO: f32 = 0.7;
const SECOND_STEM_RATIO: f32 = 0.46;

// ── Hand angles and label sequences ───────────────────────────────────────

/// Hour-hand rotation in degrees clockwise from 12 o'clock.
///
/// Continuous: 360° per 12 hours, the minutes dragging the hand between
/// hour marks.
pub fn hour_hand_angle(t: WallTime) -> f32 {
    (t.hour as f32 - 12.0 + t.minute as f32 / 60.0) * 30.0
}

/// Minute-hand rotation in degrees clockwise from 12 o'clock (360°/hour).
pub fn minute_hand_angle(t: WallTime) -> f32 {
    (t.minute as f32 + t.second as f32 / 60.0) * 6.0
}

/// Second-hand rotation in degrees clockwise from 12 o'clock (360°/minute).
pub fn second_hand_angle(t: WallTime) -> f32 {
    (t.second as f32 + t.millisecond as f32 / 1000.0) * 6.0
}

/// Minute label at dial position `i`, where position 0 is the 3-o'clock
/// anchor: 15, 20, …, 60, 5, 10.
pub fn minute_label(i: u32) -> u32 {
    (10 + 5 * i) % 60 + 5
}

/// Hour label at dial position `i`, where position 0 is the 3-o'clock
/// anchor: 3, 4, …, 12, 1, 2.
pub fn hour_label(i: u32) -> u32 {
    (i + 2) % 12 + 1
}

/// Unit vector pointing `deg` degrees clockwise from 12 o'clock.
fn clock_dir(deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

// ── Label cache ───────────────────────────────────────────────────────────

/// Measured label extents for the current dial size.
///
/// The two values are one atom: the cache is either absent or valid for
/// both label rings, never half-initialized.
#[derive(Debug, Copy, Clone, PartialEq)]
struct LabelSizes {
    minute: f32,
    hour: f32,
}

// ── Clock ─────────────────────────────────────────────────────────────────

/// Analog clock dial: 60 tick marks, minute and hour label rings, three
/// hands, and a center cap, all positioned from the wall time carried by
/// the painter.
///
/// # Example
/// ```rust,ignore
/// Clock::new(font)
///     .face_color(Color::from_srgb_u8(220, 220, 220, 255))
///     .accent_color(Color::from_srgb_u8(255, 80, 80, 255))
/// ```
pub struct Clock {
    style: ClockStyle,
    font: FontId,
    /// Measured "60" extents, dropped whenever the host resizes.
    label_sizes: Cell<Option<LabelSizes>>,
}

impl Clock {
    pub fn new(font: FontId) -> Self {
        Self {
            style: ClockStyle::default(),
            font,
            label_sizes: Cell::new(None),
        }
    }

    pub fn background(mut self, v: Color) -> Self {
        self.style.background = v;
        self
    }

    pub fn face_color(mut self, v: Color) -> Self {
        self.style.face = v;
        self
    }

    pub fn accent_color(mut self, v: Color) -> Self {
        self.style.accent = v;
        self
    }

    /// Current colors.
    pub fn style(&self) -> ClockStyle {
        self.style
    }

    /// Host-mutable colors; changes apply on the next frame.
    pub fn style_mut(&mut self) -> &mut ClockStyle {
        &mut self.style
    }

    /// Drops the cached label measurements; the next paint re-measures at
    /// the then-current size.
    pub fn invalidate_labels(&self) {
        self.label_sizes.set(None);
    }

    /// Returns the cached label extents, measuring the widest label ("60")
    /// in both fonts when the cache is empty.
    fn label_sizes(&self, painter: &Painter<'_>, minute_font: f32, hour_font: f32) -> LabelSizes {
        if let Some(sizes) = self.label_sizes.get() {
            return sizes;
        }
        let minute = painter.measure_text("60", self.font, minute_font);
        let hour = painter.measure_text("60", self.font, hour_font);
        let sizes = LabelSizes {
            minute: minute.x.max(minute.y),
            hour: hour.x.max(hour.y),
        };
        self.label_sizes.set(Some(sizes));
        sizes
    }

    fn draw_ticks(&self, painter: &mut Painter<'_>, center: Vec2, radius: f32, minute_size: f32) {
        let half = minute_size / 2.0;
        let spread = half * TICK_SPREAD;
        let color = self.style.face.mul_alpha(TICK_ALPHA);

        for i in 0..60 {
            if i % 5 == 0 {
                // A numeric label sits at this position.
                continue;
            }
            let dir = clock_dir(6.0 * i as f32);
            let p0 = center + dir * (radius - half - spread);
            let p1 = center + dir * (radius - half + spread);
            painter.line(p0, p1, 1.0, color);
        }
    }

    fn draw_labels(
        &self,
        painter: &mut Painter<'_>,
        center: Vec2,
        radius: f32,
        labels: LabelSizes,
        minute_font: f32,
        hour_font: f32,
    ) {
        for i in 0..12 {
            // Positions advance clockwise from the 3-o'clock axis.
            let rad = (30.0 * i as f32).to_radians();
            let dir = Vec2::new(rad.cos(), rad.sin());

            painter.text_centered(
                &format!("{:02}", minute_label(i)),
                self.font,
                minute_font,
                self.style.face,
                center + dir * (radius - labels.minute),
            );
            painter.text_centered(
                &hour_label(i).to_string(),
                self.font,
                hour_font,
                self.style.face,
                center + dir * (radius - labels.hour),
            );
        }
    }

    /// Two stacked capsule segments: a thin core reaching the center and a
    /// wider overlay stopping `base` short of it, tapering the hand.
    fn draw_hand(
        &self,
        painter: &mut Painter<'_>,
        center: Vec2,
        angle_deg: f32,
        length: f32,
        base: f32,
        cap: f32,
    ) {
        let frame = Transform::new(angle_deg.to_radians(), center);

        let core_w = cap * HAND_CORE_RATIO;
        let core = Rect::new(-core_w / 2.0, -length, core_w, length);
        painter.fill_path(rounded_rect(core, core_w), frame, self.style.face);

        let overlay_w = cap * HAND_OVERLAY_RATIO;
        let overlay = Rect::new(-overlay_w / 2.0, -length, overlay_w, length - base);
        painter.fill_path(rounded_rect(overlay, overlay_w), frame, self.style.face);
    }

    /// Thin stem from the label ring past the center, plus the counterweight
    /// disc with a background-colored hole punched into it — the ring.
    fn draw_second_hand(
        &self,
        painter: &mut Painter<'_>,
        center: Vec2,
        radius: f32,
        minute_size: f32,
        base: f32,
        cap: f32,
        angle_deg: f32,
    ) {
        let frame = Transform::new(angle_deg.to_radians(), center);
        let disc_d = cap * SECOND_DISC_RATIO;
        let stem_w = disc_d / 2.0 * SECOND_STEM_RATIO;

        painter.fill_circle(center, disc_d / 2.0, self.style.accent);

        let stem = Rect::new(
            -stem_w / 2.0,
            -radius + minute_size / 2.0,
            stem_w,
            radius + base,
        );
        painter.fill_path(rounded_rect(stem, 0.0), frame, self.style.accent);

        let hole_r = (disc_d - stem_w * 2.0) / 2.0;
        painter.fill_circle(center, hole_r, self.style.background);
    }
}

impl Widget for Clock {
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        // Largest centered square that fits the allocated rect.
        let clock_size = rect.size.x.min(rect.size.y);
        let center = rect.center();
        let radius = clock_size / 2.0;
        let wall = painter.wall;

        let minute_font = clock_size * MINUTE_FONT_FACTOR;
        let hour_font = minute_font * HOUR_FONT_RATIO;
        let labels = self.label_sizes(painter, minute_font, hour_font);

        self.draw_ticks(painter, center, radius, labels.minute);
        self.draw_labels(painter, center, radius, labels, minute_font, hour_font);

        let cap = clock_size * CENTER_CAP_FACTOR;
        painter.fill_circle(center, cap / 2.0, self.style.face);

        let base = clock_size * HAND_BASE_FACTOR;
        self.draw_hand(
            painter,
            center,
            hour_hand_angle(wall),
            clock_size * HOUR_HAND_FACTOR,
            base,
            cap,
        );
        self.draw_hand(
            painter,
            center,
            minute_hand_angle(wall),
            clock_size * MINUTE_HAND_FACTOR,
            base,
            cap,
        );
        self.draw_second_hand(
            painter,
            center,
            radius,
            labels.minute,
            base,
            cap,
            second_hand_angle(wall),
        );
    }

    fn on_resize(&mut self) {
        self.invalidate_labels();
    }
}
