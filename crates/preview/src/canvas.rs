use dashgrid_types::{Color, Rect, Size};
use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::iso_8859_1::FONT_7X13;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use image::{Rgb, RgbImage};

/// Advance of one glyph in the label font.
pub const GLYPH_WIDTH: i32 = FONT_7X13.character_size.width as i32;
/// Height of one glyph in the label font.
pub const GLYPH_HEIGHT: i32 = FONT_7X13.character_size.height as i32;

/// An RGB bitmap with clipped drawing primitives. Every write outside the
/// bitmap is silently discarded.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(size: Size, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(size.width, size.height, Rgb(background.to_array())),
        }
    }

    pub fn dimensions(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, Rgb(color.to_array()));
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgb([r, g, b])| Color::rgb(*r, *g, *b))
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let visible = rect.intersect(self.dimensions().bounds());
        for y in visible.y..visible.bottom() {
            for x in visible.x..visible.right() {
                self.image.put_pixel(x as u32, y as u32, Rgb(color.to_array()));
            }
        }
    }

    /// One pixel outline along the inside edge of `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let visible = rect.intersect(self.dimensions().bounds());
        if rect.is_empty() || visible.is_empty() {
            return;
        }
        for x in visible.x..visible.right() {
            self.put(x, rect.y, color);
            self.put(x, rect.bottom() - 1, color);
        }
        for y in visible.y..visible.bottom() {
            self.put(rect.x, y, color);
            self.put(rect.right() - 1, y, color);
        }
    }

    /// Full-width horizontal line.
    pub fn hline(&mut self, y: i32, color: Color) {
        let width = self.image.width() as i32;
        self.fill_rect(Rect::new(0, y, width, 1), color);
    }

    /// Full-height vertical line.
    pub fn vline(&mut self, x: i32, color: Color) {
        let height = self.image.height() as i32;
        self.fill_rect(Rect::new(x, 0, 1, height), color);
    }

    /// Draws `text` with its alphabetic baseline at `baseline`, starting at `x`.
    pub fn text(&mut self, text: &str, x: i32, baseline: i32, color: Color) {
        let size = self.dimensions();
        if i64::from(x) >= i64::from(size.width)
            || i64::from(baseline) - i64::from(GLYPH_HEIGHT) >= i64::from(size.height)
        {
            return;
        }
        let style = MonoTextStyle::new(&FONT_7X13, Rgb888::new(color.r, color.g, color.b));
        let Ok(_) =
            Text::with_baseline(text, Point::new(x, baseline), style, Baseline::Alphabetic)
                .draw(self);
    }

    /// Draws `text` horizontally centered within `[x, x + width)`.
    pub fn text_centered(&mut self, text: &str, x: i32, width: i32, baseline: i32, color: Color) {
        let left = i64::from(x) + (i64::from(width) - i64::from(text_width(text))) / 2;
        let left = left.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        self.text(text, left, baseline, color);
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

pub fn text_width(text: &str) -> i32 {
    i32::try_from(text.chars().count())
        .unwrap_or(i32::MAX)
        .saturating_mul(GLYPH_WIDTH)
}

impl OriginDimensions for Canvas {
    fn size(&self) -> embedded_graphics::geometry::Size {
        embedded_graphics::geometry::Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = std::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.put(point.x, point.y, Color::rgb(color.r(), color.g(), color.b()));
        }
        Ok(())
    }
}
