use crate::foundation::error::{SignscaleError, SignscaleResult};

/// Laid-out text. Paint is chosen per draw, so runs carry no brush.
pub(crate) type TextLayout = parley::Layout<()>;

/// Whole-pixel size of a text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBox {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl TextBox {
    pub(crate) fn of(layout: &TextLayout) -> Self {
        Self {
            width: layout.width().max(0.0).ceil() as u32,
            height: layout.height().max(0.0).ceil() as u32,
        }
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts and no system fonts.
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register `font_bytes` and return the family name Parley knows it by.
    fn register_family(&mut self, font_bytes: &[u8]) -> SignscaleResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SignscaleError::font("no font families registered from font bytes"))?;

        Ok(self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SignscaleError::font("registered font family has no name"))?
            .to_string())
    }

    /// Shape and lay out unwrapped text at `size_px`, adding `letter_spacing_px` between glyphs.
    pub(crate) fn layout_plain(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        letter_spacing_px: f32,
    ) -> SignscaleResult<TextLayout> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SignscaleError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let family_name = self.register_family(font_bytes)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        if letter_spacing_px > 0.0 {
            builder.push_default(parley::style::StyleProperty::LetterSpacing(
                letter_spacing_px,
            ));
        }

        let mut layout: TextLayout = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sign/layout.rs"]
mod tests;
