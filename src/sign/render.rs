use image::RgbaImage;

use crate::assets::decode::encode_png;
use crate::assets::fonts::FontTable;
use crate::calibrate::scale::ScaleRatio;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{SignscaleError, SignscaleResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::sign::layout::{TextBox, TextLayout, TextLayoutEngine};
use crate::sign::spec::SignSpec;

/// Margin around the text on every side of the sign canvas.
pub const SIGN_MARGIN_PX: u32 = 10;
/// Outline stamps cover offsets `-OUTLINE_RADIUS_PX..=OUTLINE_RADIUS_PX` on both axes.
pub const OUTLINE_RADIUS_PX: i32 = 2;
/// Fixed size of the dimension caption, independent of the sign size.
pub const CAPTION_SIZE_PX: f32 = 20.0;
/// Gap between the bottom of the text box and the top of the caption.
pub const CAPTION_GAP_PX: u32 = 15;

const CAPTION_COLOR: Rgba8 = Rgba8::BLACK;

/// A sign graphic rasterized at true scale.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedSign {
    /// Straight-alpha RGBA8 bitmap; everything outside glyphs is fully transparent.
    pub image: RgbaImage,
    /// Font size the text was laid out at.
    pub font_size_px: u32,
    /// Laid-out text box, excluding the canvas margin.
    pub text_width_px: u32,
    pub text_height_px: u32,
    pub height_in: f64,
    /// Real-world width of the text box at the calibrated ratio.
    pub width_in: f64,
    /// Dimension annotation drawn under the text.
    pub caption: String,
}

impl RenderedSign {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn to_png(&self) -> SignscaleResult<Vec<u8>> {
        encode_png(&self.image)
    }
}

/// Caption text for a sign of the given real-world size.
pub fn dimension_caption(height_in: f64, width_in: f64) -> String {
    format!("Height: {height_in:?}\" Width: {width_in:.2}\"")
}

/// Every outline stamp offset: the 5x5 neighborhood minus the origin, row by row.
pub fn outline_offsets() -> impl Iterator<Item = (i32, i32)> {
    let r = OUTLINE_RADIUS_PX;
    (-r..=r)
        .flat_map(move |dx| (-r..=r).map(move |dy| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
}

/// Rasterizes [`SignSpec`]s with fonts resolved through a [`FontTable`].
#[derive(Clone, Debug, Default)]
pub struct SignRenderer {
    fonts: FontTable,
}

impl SignRenderer {
    pub fn new(fonts: FontTable) -> Self {
        Self { fonts }
    }

    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    /// Render `spec` at the scale given by `ratio`.
    ///
    /// Empty text is tolerated here and yields the bare padded canvas; callers that want to reject
    /// it use [`SignSpec::validate`]. Every call starts from fresh layout contexts, so identical
    /// inputs produce identical pixels.
    #[tracing::instrument(skip(self, spec), fields(text = %spec.text, font = %spec.font))]
    pub fn render(&self, spec: &SignSpec, ratio: ScaleRatio) -> SignscaleResult<RenderedSign> {
        let font_size_px = spec.pixel_size(ratio)?;
        let mut engine = TextLayoutEngine::new();

        let sign_font = self.fonts.load(spec.font)?;
        let text_layout = if spec.text.is_empty() {
            None
        } else {
            Some(engine.layout_plain(
                &spec.text,
                &sign_font,
                font_size_px as f32,
                spec.letter_spacing_px as f32,
            )?)
        };
        let text_box = text_layout.as_ref().map(TextBox::of).unwrap_or_default();

        let canvas_w = text_box.width.saturating_add(2 * SIGN_MARGIN_PX);
        let canvas_h = text_box.height.saturating_add(2 * SIGN_MARGIN_PX);
        let (w16, h16) = canvas_dims_u16(canvas_w, canvas_h)?;
        tracing::debug!(
            font_size_px,
            text_w = text_box.width,
            text_h = text_box.height,
            canvas_w,
            canvas_h,
            "sized sign canvas"
        );

        let width_in = ratio.px_to_inches(f64::from(text_box.width));
        let caption = dimension_caption(spec.height_in, width_in);
        let caption_font = self.fonts.load_caption()?;
        let caption_layout = engine.layout_plain(&caption, &caption_font, CAPTION_SIZE_PX, 0.0)?;
        let caption_box = TextBox::of(&caption_layout);

        let sign_font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(sign_font), 0);
        let caption_font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(caption_font), 0);

        let mut ctx = vello_cpu::RenderContext::new(w16, h16);
        let origin = f64::from(SIGN_MARGIN_PX);
        if let Some(layout) = &text_layout {
            if let Some(outline) = spec.outline {
                for (dx, dy) in outline_offsets() {
                    draw_layout(
                        &mut ctx,
                        layout,
                        &sign_font,
                        origin + f64::from(dx),
                        origin + f64::from(dy),
                        outline,
                    );
                }
            }
            draw_layout(&mut ctx, layout, &sign_font, origin, origin, spec.fill);
        }

        let caption_x = (f64::from(canvas_w) - f64::from(caption_box.width)) / 2.0;
        let caption_y = f64::from(text_box.height + CAPTION_GAP_PX);
        draw_layout(
            &mut ctx,
            &caption_layout,
            &caption_font,
            caption_x,
            caption_y,
            CAPTION_COLOR,
        );

        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        let image = RgbaImage::from_raw(canvas_w, canvas_h, data)
            .ok_or_else(|| SignscaleError::validation("sign pixmap byte len mismatch"))?;

        Ok(RenderedSign {
            image,
            font_size_px,
            text_width_px: text_box.width,
            text_height_px: text_box.height,
            height_in: spec.height_in,
            width_in,
            caption,
        })
    }
}

fn canvas_dims_u16(width: u32, height: u32) -> SignscaleResult<(u16, u16)> {
    let w: u16 = width.try_into().map_err(|_| {
        SignscaleError::validation(format!("sign canvas width {width} exceeds u16"))
    })?;
    let h: u16 = height.try_into().map_err(|_| {
        SignscaleError::validation(format!("sign canvas height {height} exceeds u16"))
    })?;
    Ok((w, h))
}

/// Fill every glyph run of `layout` with `color`, top-left of the layout box at `(x, y)`.
fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    layout: &TextLayout,
    font: &vello_cpu::peniko::FontData,
    x: f64,
    y: f64,
    color: Rgba8,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run_glyphs(&run);
            if glyphs.is_empty() {
                continue;
            }
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs.into_iter());
        }
    }
}

/// Glyphs of one run in layout coordinates, GPOS offsets included.
fn run_glyphs(run: &parley::layout::GlyphRun<'_, ()>) -> Vec<vello_cpu::Glyph> {
    run.positioned_glyphs()
        .map(|g| vello_cpu::Glyph {
            id: g.id,
            x: g.x,
            y: g.y,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sign/render.rs"]
mod tests;
