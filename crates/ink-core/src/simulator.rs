use crate::color::{channel_from_inputs, ColorError, Rgb};
use crate::emitter::EmitOptions;

/// Values every picker control should show after a colour change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerSync {
    pub hex: String,
    pub label: String,
    pub rgb: Rgb,
}

impl PickerSync {
    fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            label: rgb.to_hex_label(),
            rgb,
        }
    }
}

/// Current fill of the house illustration and the conversions between its
/// three editors (swatches/palette, hex text, RGB channels).
#[derive(Clone, Debug, Default)]
pub struct ColorSimulator {
    current: Option<Rgb>,
}

impl ColorSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill value for the SVG target, if a colour has been chosen.
    pub fn fill(&self) -> Option<String> {
        self.current.map(Rgb::to_hex)
    }

    /// Swatch, palette cell or native colour input.
    pub fn select_hex(&mut self, hex: &str) -> Result<PickerSync, ColorError> {
        let rgb = Rgb::from_hex(hex)?;
        self.current = Some(rgb);
        Ok(PickerSync::from_rgb(rgb))
    }

    /// Free-form hex text field: trimmed, `#` optional.
    pub fn hex_input(&mut self, raw: &str) -> Result<PickerSync, ColorError> {
        let raw = raw.trim();
        if raw.starts_with('#') {
            self.select_hex(raw)
        } else {
            self.select_hex(&format!("#{raw}"))
        }
    }

    /// Any of the six slider/number fields. Each pair is `(slider, number)`.
    pub fn rgb_input(
        &mut self,
        r: (&str, &str),
        g: (&str, &str),
        b: (&str, &str),
    ) -> Result<PickerSync, ColorError> {
        let rgb = Rgb::new(
            channel_from_inputs(r.0, r.1)?,
            channel_from_inputs(g.0, g.1)?,
            channel_from_inputs(b.0, b.1)?,
        );
        self.current = Some(rgb);
        Ok(PickerSync::from_rgb(rgb))
    }
}

// Ink feedback for each control.

pub fn swatch_burst(hex: &str) -> EmitOptions {
    EmitOptions::new().with_color(hex).with_size_max(28.0)
}

pub fn color_input_burst(hex: &str) -> EmitOptions {
    EmitOptions::new()
        .with_color(hex)
        .with_count(10)
        .with_size_max(26.0)
}

pub fn palette_burst(hex: &str) -> EmitOptions {
    EmitOptions::new()
        .with_color(hex)
        .with_count(10)
        .with_size_max(24.0)
}
