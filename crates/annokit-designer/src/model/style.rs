use serde::{Deserialize, Serialize};

use annokit_core::{Color, StyleError};
use annokit_settings::StyleSettings;

/// Visual attributes stamped on a shape when it is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StyleRepr")]
pub struct Style {
    pub color: Color,
    pub stroke_width: f64,
    /// Uniform alpha for stroke and fill, in `[0, 1]`.
    pub opacity: f64,
    /// Fill closed kinds with `color` before stroking.
    pub filled: bool,
}

/// Persisted styles go through [`Style::new`] like every other style.
#[derive(Deserialize)]
struct StyleRepr {
    color: Color,
    stroke_width: f64,
    opacity: f64,
    filled: bool,
}

impl TryFrom<StyleRepr> for Style {
    type Error = StyleError;

    fn try_from(repr: StyleRepr) -> Result<Self, Self::Error> {
        Style::new(repr.color, repr.stroke_width, repr.opacity, repr.filled)
    }
}

impl Style {
    /// Validate and normalise a style.
    ///
    /// The stroke width must be positive and finite. Opacity must be finite
    /// and is clamped into `[0, 1]`.
    pub fn new(
        color: Color,
        stroke_width: f64,
        opacity: f64,
        filled: bool,
    ) -> Result<Self, StyleError> {
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(StyleError::InvalidStrokeWidth {
                width: stroke_width,
            });
        }
        if !opacity.is_finite() {
            return Err(StyleError::InvalidOpacity { opacity });
        }
        Ok(Self {
            color,
            stroke_width,
            opacity: opacity.clamp(0.0, 1.0),
            filled,
        })
    }

    /// Effective 8-bit alpha: the colour's own alpha scaled by `opacity`.
    pub fn alpha(&self) -> u8 {
        (self.color.alpha_f64() * self.opacity * 255.0).round() as u8
    }
}

impl Default for Style {
    fn default() -> Self {
        let settings = StyleSettings::default();
        Self {
            color: settings.color,
            stroke_width: settings.stroke_width,
            opacity: settings.opacity,
            filled: settings.filled,
        }
    }
}

impl TryFrom<&StyleSettings> for Style {
    type Error = StyleError;

    fn try_from(settings: &StyleSettings) -> Result<Self, Self::Error> {
        Style::new(
            settings.color,
            settings.stroke_width,
            settings.opacity,
            settings.filled,
        )
    }
}

/// Playback metadata carried through untouched for hosts that animate
/// annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    #[serde(rename = "delay", default)]
    pub delay_ms: u64,
    #[serde(rename = "loop", default)]
    pub looped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_width_and_clamps_opacity() {
        assert!(matches!(
            Style::new(Color::BLACK, 0.0, 1.0, false),
            Err(StyleError::InvalidStrokeWidth { .. })
        ));
        assert!(Style::new(Color::BLACK, f64::INFINITY, 1.0, false).is_err());
        assert!(matches!(
            Style::new(Color::BLACK, 1.0, f64::NAN, false),
            Err(StyleError::InvalidOpacity { .. })
        ));
        let style = Style::new(Color::BLACK, 2.0, 3.0, true).unwrap();
        assert_eq!(style.opacity, 1.0);
        let style = Style::new(Color::BLACK, 2.0, -1.0, true).unwrap();
        assert_eq!(style.opacity, 0.0);
    }

    #[test]
    fn test_alpha_combines_color_and_opacity() {
        let style = Style::new(Color::rgba(0, 0, 0, 255), 1.0, 0.5, false).unwrap();
        assert_eq!(style.alpha(), 128);
        let style = Style::new(Color::rgba(0, 0, 0, 0), 1.0, 1.0, false).unwrap();
        assert_eq!(style.alpha(), 0);
    }

    #[test]
    fn test_deserialize_revalidates() {
        let err = serde_json::from_str::<Style>(
            r##"{"color":"#000000","stroke_width":-5.0,"opacity":1.0,"filled":false}"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Stroke width"));

        let style: Style = serde_json::from_str(
            r##"{"color":"#000000","stroke_width":2.0,"opacity":7.0,"filled":true}"##,
        )
        .unwrap();
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_animation_wire_names() {
        let anim: Animation =
            serde_json::from_str(r#"{"type":"fade","duration":400,"loop":true}"#).unwrap();
        assert_eq!(anim.kind, "fade");
        assert_eq!(anim.duration_ms, 400);
        assert_eq!(anim.delay_ms, 0);
        assert!(anim.looped);
    }
}
