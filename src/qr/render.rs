//! Terminal and SVG rendering of QR codes.

use qrcode::render::svg;
use qrcode::QrCode;
use serde::{Deserialize, Serialize};

use super::codec::QrError;

/// Output format for rendered QR codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrFormat {
    /// Block characters for terminal display.
    #[default]
    Ascii,
    /// An SVG document for GUI or print use.
    Svg,
}

/// Renders byte payloads as QR codes.
pub struct QrRenderer {
    format: QrFormat,
    quiet_zone: bool,
}

impl QrRenderer {
    /// Creates a renderer for the given output format.
    pub fn new(format: QrFormat) -> Self {
        Self {
            format,
            quiet_zone: true,
        }
    }

    /// Enables or disables the quiet zone border.
    pub fn quiet_zone(mut self, enabled: bool) -> Self {
        self.quiet_zone = enabled;
        self
    }

    /// Renders a payload into a displayable QR code.
    pub fn render(&self, payload: &[u8]) -> Result<String, QrError> {
        let code = QrCode::new(payload).map_err(|e| QrError::RenderFailed(e.to_string()))?;

        let rendered = match self.format {
            QrFormat::Ascii => code
                .render::<char>()
                .quiet_zone(self.quiet_zone)
                .module_dimensions(2, 1)
                .dark_color('█')
                .light_color(' ')
                .build(),
            QrFormat::Svg => code
                .render()
                .min_dimensions(200, 200)
                .quiet_zone(self.quiet_zone)
                .dark_color(svg::Color("#000000"))
                .light_color(svg::Color("#ffffff"))
                .build(),
        };

        Ok(rendered)
    }
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new(QrFormat::default())
    }
}
