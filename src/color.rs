// src/color.rs

//! Defines the symbolic palette (`Color`), its concrete display value (`Rgba`)
//! and the lookups between the two.
//!
//! The palette is a fixed table indexed by the `Color` discriminant, so the
//! forward lookup is a single array access. The reverse lookup goes through a
//! lazily built inverse table keyed by the exact channel bits; aliased names
//! (`Gray`/`Grey` and friends) resolve to whichever entry was inserted first.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A concrete display color with normalized `[0, 1]` channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black, used for both `Color::None` and `Color::Transparent`.
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    fn key(&self) -> [u32; 4] {
        [self.r.to_bits(), self.g.to_bits(), self.b.to_bits(), self.a.to_bits()]
    }
}

/// The named palette a game draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Color {
    #[default]
    /// Sentinel for "no color"; renders fully transparent.
    None,
    /// Fully transparent; display-equivalent to `None`.
    Transparent,
    AliceBlue,
    AntiqueWhite,
    Aqua,
    Aquamarine,
    Azure,
    Beige,
    Bisque,
    Black,
    BlanchedAlmond,
    Blue,
    BlueViolet,
    Brown,
    Burlywood,
    CadetBlue,
    Chartreuse,
    Chocolate,
    Coral,
    CornflowerBlue,
    Cornsilk,
    Crimson,
    Cyan,
    DarkBlue,
    DarkCyan,
    DarkGoldenrod,
    DarkGray,
    DarkGreen,
    DarkGrey,
    DarkKhaki,
    DarkMagenta,
    DarkOliveGreen,
    DarkOrange,
    DarkOrchid,
    DarkRed,
    DarkSalmon,
    DarkSeaGreen,
    DarkSlateBlue,
    DarkSlateGray,
    DarkSlateGrey,
    DarkTurquoise,
    DarkViolet,
    DeepPink,
    DeepSkyBlue,
    DimGray,
    DimGrey,
    DodgerBlue,
    Firebrick,
    FloralWhite,
    ForestGreen,
    Fuchsia,
    Gainsboro,
    GhostWhite,
    Gold,
    Goldenrod,
    Gray,
    Green,
    GreenYellow,
    Grey,
    Honeydew,
    HotPink,
    IndianRed,
    Indigo,
    Ivory,
    Khaki,
    Lavender,
    LavenderBlush,
    LawnGreen,
    LemonChiffon,
    LightBlue,
    LightCoral,
    LightCyan,
    LightGoldenrodYellow,
    LightGray,
    LightGreen,
    LightGrey,
    LightPink,
    LightSalmon,
    LightSeaGreen,
    LightSkyBlue,
    LightSlateGray,
    LightSlateGrey,
    LightSteelBlue,
    LightYellow,
    Lime,
    LimeGreen,
    Linen,
    Magenta,
    Maroon,
    MediumAquamarine,
    MediumBlue,
    MediumOrchid,
    MediumPurple,
    MediumSeaGreen,
    MediumSlateBlue,
    MediumSpringGreen,
    MediumTurquoise,
    MediumVioletRed,
    MidnightBlue,
    MintCream,
    MistyRose,
    Moccasin,
    NavajoWhite,
    Navy,
    OldLace,
    Olive,
    OliveDrab,
    Orange,
    OrangeRed,
    Orchid,
    PaleGoldenrod,
    PaleGreen,
    PaleTurquoise,
    PaleVioletRed,
    PapayaWhip,
    PeachPuff,
    Peru,
    Pink,
    Plum,
    PowderBlue,
    Purple,
    Red,
    RosyBrown,
    RoyalBlue,
    SaddleBrown,
    Salmon,
    SandyBrown,
    SeaGreen,
    Seashell,
    Sienna,
    Silver,
    SkyBlue,
    SlateBlue,
    SlateGray,
    SlateGrey,
    Snow,
    SpringGreen,
    SteelBlue,
    Tan,
    Teal,
    Thistle,
    Tomato,
    Turquoise,
    Violet,
    Wheat,
    White,
    WhiteSmoke,
    Yellow,
    YellowGreen,
}

const PALETTE_SIZE: usize = 149;

/// Palette table, ordered by `Color` discriminant.
static PALETTE: [(Color, Rgba); PALETTE_SIZE] = [
    (Color::None, Rgba::new(0.0, 0.0, 0.0, 0.0)),
    (Color::Transparent, Rgba::new(0.0, 0.0, 0.0, 0.0)),
    (Color::AliceBlue, Rgba::new(0.9411765, 0.972549, 1.0, 1.0)),
    (Color::AntiqueWhite, Rgba::new(0.98039216, 0.92156863, 0.84313726, 1.0)),
    (Color::Aqua, Rgba::new(0.0, 1.0, 1.0, 1.0)),
    (Color::Aquamarine, Rgba::new(0.49803922, 1.0, 0.83137256, 1.0)),
    (Color::Azure, Rgba::new(0.9411765, 1.0, 1.0, 1.0)),
    (Color::Beige, Rgba::new(0.9607843, 0.9607843, 0.8627451, 1.0)),
    (Color::Bisque, Rgba::new(1.0, 0.89411765, 0.76862746, 1.0)),
    (Color::Black, Rgba::new(0.0, 0.0, 0.0, 1.0)),
    (Color::BlanchedAlmond, Rgba::new(1.0, 0.92156863, 0.8039216, 1.0)),
    (Color::Blue, Rgba::new(0.0, 0.0, 1.0, 1.0)),
    (Color::BlueViolet, Rgba::new(0.5411765, 0.16862746, 0.8862745, 1.0)),
    (Color::Brown, Rgba::new(0.64705884, 0.16470589, 0.16470589, 1.0)),
    (Color::Burlywood, Rgba::new(0.87058824, 0.72156864, 0.5294118, 1.0)),
    (Color::CadetBlue, Rgba::new(0.37254903, 0.61960787, 0.627451, 1.0)),
    (Color::Chartreuse, Rgba::new(0.49803922, 1.0, 0.0, 1.0)),
    (Color::Chocolate, Rgba::new(0.8235294, 0.4117647, 0.11764706, 1.0)),
    (Color::Coral, Rgba::new(1.0, 0.49803922, 0.3137255, 1.0)),
    (Color::CornflowerBlue, Rgba::new(0.39215687, 0.58431375, 0.92941177, 1.0)),
    (Color::Cornsilk, Rgba::new(1.0, 0.972549, 0.8627451, 1.0)),
    (Color::Crimson, Rgba::new(0.8627451, 0.078431375, 0.23529412, 1.0)),
    (Color::Cyan, Rgba::new(0.0, 1.0, 1.0, 1.0)),
    (Color::DarkBlue, Rgba::new(0.0, 0.0, 0.54509807, 1.0)),
    (Color::DarkCyan, Rgba::new(0.0, 0.54509807, 0.54509807, 1.0)),
    (Color::DarkGoldenrod, Rgba::new(0.72156864, 0.5254902, 0.043137256, 1.0)),
    (Color::DarkGray, Rgba::new(0.6627451, 0.6627451, 0.6627451, 1.0)),
    (Color::DarkGreen, Rgba::new(0.0, 0.39215687, 0.0, 1.0)),
    (Color::DarkGrey, Rgba::new(0.6627451, 0.6627451, 0.6627451, 1.0)),
    (Color::DarkKhaki, Rgba::new(0.7411765, 0.7176471, 0.41960785, 1.0)),
    (Color::DarkMagenta, Rgba::new(0.54509807, 0.0, 0.54509807, 1.0)),
    (Color::DarkOliveGreen, Rgba::new(0.33333334, 0.41960785, 0.18431373, 1.0)),
    (Color::DarkOrange, Rgba::new(1.0, 0.54901963, 0.0, 1.0)),
    (Color::DarkOrchid, Rgba::new(0.6, 0.19607843, 0.8, 1.0)),
    (Color::DarkRed, Rgba::new(0.54509807, 0.0, 0.0, 1.0)),
    (Color::DarkSalmon, Rgba::new(0.9137255, 0.5882353, 0.47843137, 1.0)),
    (Color::DarkSeaGreen, Rgba::new(0.56078434, 0.7372549, 0.56078434, 1.0)),
    (Color::DarkSlateBlue, Rgba::new(0.28235295, 0.23921569, 0.54509807, 1.0)),
    (Color::DarkSlateGray, Rgba::new(0.18431373, 0.30980393, 0.30980393, 1.0)),
    (Color::DarkSlateGrey, Rgba::new(0.18431373, 0.30980393, 0.30980393, 1.0)),
    (Color::DarkTurquoise, Rgba::new(0.0, 0.80784315, 0.81960785, 1.0)),
    (Color::DarkViolet, Rgba::new(0.5803922, 0.0, 0.827451, 1.0)),
    (Color::DeepPink, Rgba::new(1.0, 0.078431375, 0.5764706, 1.0)),
    (Color::DeepSkyBlue, Rgba::new(0.0, 0.7490196, 1.0, 1.0)),
    (Color::DimGray, Rgba::new(0.4117647, 0.4117647, 0.4117647, 1.0)),
    (Color::DimGrey, Rgba::new(0.4117647, 0.4117647, 0.4117647, 1.0)),
    (Color::DodgerBlue, Rgba::new(0.11764706, 0.5647059, 1.0, 1.0)),
    (Color::Firebrick, Rgba::new(0.69803923, 0.13333334, 0.13333334, 1.0)),
    (Color::FloralWhite, Rgba::new(1.0, 0.98039216, 0.9411765, 1.0)),
    (Color::ForestGreen, Rgba::new(0.13333334, 0.54509807, 0.13333334, 1.0)),
    (Color::Fuchsia, Rgba::new(1.0, 0.0, 1.0, 1.0)),
    (Color::Gainsboro, Rgba::new(0.8627451, 0.8627451, 0.8627451, 1.0)),
    (Color::GhostWhite, Rgba::new(0.972549, 0.972549, 1.0, 1.0)),
    (Color::Gold, Rgba::new(1.0, 0.84313726, 0.0, 1.0)),
    (Color::Goldenrod, Rgba::new(0.85490197, 0.64705884, 0.1254902, 1.0)),
    (Color::Gray, Rgba::new(0.5019608, 0.5019608, 0.5019608, 1.0)),
    (Color::Green, Rgba::new(0.0, 0.5019608, 0.0, 1.0)),
    (Color::GreenYellow, Rgba::new(0.6784314, 1.0, 0.18431373, 1.0)),
    (Color::Grey, Rgba::new(0.5019608, 0.5019608, 0.5019608, 1.0)),
    (Color::Honeydew, Rgba::new(0.9411765, 1.0, 0.9411765, 1.0)),
    (Color::HotPink, Rgba::new(1.0, 0.4117647, 0.7058824, 1.0)),
    (Color::IndianRed, Rgba::new(0.8039216, 0.36078432, 0.36078432, 1.0)),
    (Color::Indigo, Rgba::new(0.29411766, 0.0, 0.50980395, 1.0)),
    (Color::Ivory, Rgba::new(1.0, 1.0, 0.9411765, 1.0)),
    (Color::Khaki, Rgba::new(0.9411765, 0.9019608, 0.54901963, 1.0)),
    (Color::Lavender, Rgba::new(0.9019608, 0.9019608, 0.98039216, 1.0)),
    (Color::LavenderBlush, Rgba::new(1.0, 0.9411765, 0.9607843, 1.0)),
    (Color::LawnGreen, Rgba::new(0.4862745, 0.9882353, 0.0, 1.0)),
    (Color::LemonChiffon, Rgba::new(1.0, 0.98039216, 0.8039216, 1.0)),
    (Color::LightBlue, Rgba::new(0.6784314, 0.84705883, 0.9019608, 1.0)),
    (Color::LightCoral, Rgba::new(0.9411765, 0.5019608, 0.5019608, 1.0)),
    (Color::LightCyan, Rgba::new(0.8784314, 1.0, 1.0, 1.0)),
    (Color::LightGoldenrodYellow, Rgba::new(0.98039216, 0.98039216, 0.8235294, 1.0)),
    (Color::LightGray, Rgba::new(0.827451, 0.827451, 0.827451, 1.0)),
    (Color::LightGreen, Rgba::new(0.5647059, 0.93333334, 0.5647059, 1.0)),
    (Color::LightGrey, Rgba::new(0.827451, 0.827451, 0.827451, 1.0)),
    (Color::LightPink, Rgba::new(1.0, 0.7137255, 0.75686276, 1.0)),
    (Color::LightSalmon, Rgba::new(1.0, 0.627451, 0.47843137, 1.0)),
    (Color::LightSeaGreen, Rgba::new(0.1254902, 0.69803923, 0.6666667, 1.0)),
    (Color::LightSkyBlue, Rgba::new(0.5294118, 0.80784315, 0.98039216, 1.0)),
    (Color::LightSlateGray, Rgba::new(0.46666667, 0.53333336, 0.6, 1.0)),
    (Color::LightSlateGrey, Rgba::new(0.46666667, 0.53333336, 0.6, 1.0)),
    (Color::LightSteelBlue, Rgba::new(0.6901961, 0.76862746, 0.87058824, 1.0)),
    (Color::LightYellow, Rgba::new(1.0, 1.0, 0.8784314, 1.0)),
    (Color::Lime, Rgba::new(0.0, 1.0, 0.0, 1.0)),
    (Color::LimeGreen, Rgba::new(0.19607843, 0.8039216, 0.19607843, 1.0)),
    (Color::Linen, Rgba::new(0.98039216, 0.9411765, 0.9019608, 1.0)),
    (Color::Magenta, Rgba::new(1.0, 0.0, 1.0, 1.0)),
    (Color::Maroon, Rgba::new(0.5019608, 0.0, 0.0, 1.0)),
    (Color::MediumAquamarine, Rgba::new(0.4, 0.8039216, 0.6666667, 1.0)),
    (Color::MediumBlue, Rgba::new(0.0, 0.0, 0.8039216, 1.0)),
    (Color::MediumOrchid, Rgba::new(0.7294118, 0.33333334, 0.827451, 1.0)),
    (Color::MediumPurple, Rgba::new(0.5764706, 0.4392157, 0.85882354, 1.0)),
    (Color::MediumSeaGreen, Rgba::new(0.23529412, 0.7019608, 0.44313726, 1.0)),
    (Color::MediumSlateBlue, Rgba::new(0.48235294, 0.40784314, 0.93333334, 1.0)),
    (Color::MediumSpringGreen, Rgba::new(0.0, 0.98039216, 0.6039216, 1.0)),
    (Color::MediumTurquoise, Rgba::new(0.28235295, 0.81960785, 0.8, 1.0)),
    (Color::MediumVioletRed, Rgba::new(0.78039217, 0.08235294, 0.52156866, 1.0)),
    (Color::MidnightBlue, Rgba::new(0.09803922, 0.09803922, 0.4392157, 1.0)),
    (Color::MintCream, Rgba::new(0.9607843, 1.0, 0.98039216, 1.0)),
    (Color::MistyRose, Rgba::new(1.0, 0.89411765, 0.88235295, 1.0)),
    (Color::Moccasin, Rgba::new(1.0, 0.89411765, 0.70980394, 1.0)),
    (Color::NavajoWhite, Rgba::new(1.0, 0.87058824, 0.6784314, 1.0)),
    (Color::Navy, Rgba::new(0.0, 0.0, 0.5019608, 1.0)),
    (Color::OldLace, Rgba::new(0.99215686, 0.9607843, 0.9019608, 1.0)),
    (Color::Olive, Rgba::new(0.5019608, 0.5019608, 0.0, 1.0)),
    (Color::OliveDrab, Rgba::new(0.41960785, 0.5568628, 0.13725491, 1.0)),
    (Color::Orange, Rgba::new(1.0, 0.64705884, 0.0, 1.0)),
    (Color::OrangeRed, Rgba::new(1.0, 0.27058825, 0.0, 1.0)),
    (Color::Orchid, Rgba::new(0.85490197, 0.4392157, 0.8392157, 1.0)),
    (Color::PaleGoldenrod, Rgba::new(0.93333334, 0.9098039, 0.6666667, 1.0)),
    (Color::PaleGreen, Rgba::new(0.59607846, 0.9843137, 0.59607846, 1.0)),
    (Color::PaleTurquoise, Rgba::new(0.6862745, 0.93333334, 0.93333334, 1.0)),
    (Color::PaleVioletRed, Rgba::new(0.85882354, 0.4392157, 0.5764706, 1.0)),
    (Color::PapayaWhip, Rgba::new(1.0, 0.9372549, 0.8352941, 1.0)),
    (Color::PeachPuff, Rgba::new(1.0, 0.85490197, 0.7254902, 1.0)),
    (Color::Peru, Rgba::new(0.8039216, 0.52156866, 0.24705882, 1.0)),
    (Color::Pink, Rgba::new(1.0, 0.7529412, 0.79607844, 1.0)),
    (Color::Plum, Rgba::new(0.8666667, 0.627451, 0.8666667, 1.0)),
    (Color::PowderBlue, Rgba::new(0.6901961, 0.8784314, 0.9019608, 1.0)),
    (Color::Purple, Rgba::new(0.5019608, 0.0, 0.5019608, 1.0)),
    (Color::Red, Rgba::new(1.0, 0.0, 0.0, 1.0)),
    (Color::RosyBrown, Rgba::new(0.7372549, 0.56078434, 0.56078434, 1.0)),
    (Color::RoyalBlue, Rgba::new(0.25490198, 0.4117647, 0.88235295, 1.0)),
    (Color::SaddleBrown, Rgba::new(0.54509807, 0.27058825, 0.07450981, 1.0)),
    (Color::Salmon, Rgba::new(0.98039216, 0.5019608, 0.44705883, 1.0)),
    (Color::SandyBrown, Rgba::new(0.95686275, 0.6431373, 0.3764706, 1.0)),
    (Color::SeaGreen, Rgba::new(0.18039216, 0.54509807, 0.34117648, 1.0)),
    (Color::Seashell, Rgba::new(1.0, 0.9607843, 0.93333334, 1.0)),
    (Color::Sienna, Rgba::new(0.627451, 0.32156864, 0.1764706, 1.0)),
    (Color::Silver, Rgba::new(0.7529412, 0.7529412, 0.7529412, 1.0)),
    (Color::SkyBlue, Rgba::new(0.5294118, 0.80784315, 0.92156863, 1.0)),
    (Color::SlateBlue, Rgba::new(0.41568628, 0.3529412, 0.8039216, 1.0)),
    (Color::SlateGray, Rgba::new(0.4392157, 0.5019608, 0.5647059, 1.0)),
    (Color::SlateGrey, Rgba::new(0.4392157, 0.5019608, 0.5647059, 1.0)),
    (Color::Snow, Rgba::new(1.0, 0.98039216, 0.98039216, 1.0)),
    (Color::SpringGreen, Rgba::new(0.0, 1.0, 0.49803922, 1.0)),
    (Color::SteelBlue, Rgba::new(0.27450982, 0.50980395, 0.7058824, 1.0)),
    (Color::Tan, Rgba::new(0.8235294, 0.7058824, 0.54901963, 1.0)),
    (Color::Teal, Rgba::new(0.0, 0.5019608, 0.5019608, 1.0)),
    (Color::Thistle, Rgba::new(0.84705883, 0.7490196, 0.84705883, 1.0)),
    (Color::Tomato, Rgba::new(1.0, 0.3882353, 0.2784314, 1.0)),
    (Color::Turquoise, Rgba::new(0.2509804, 0.8784314, 0.8156863, 1.0)),
    (Color::Violet, Rgba::new(0.93333334, 0.50980395, 0.93333334, 1.0)),
    (Color::Wheat, Rgba::new(0.9607843, 0.87058824, 0.7019608, 1.0)),
    (Color::White, Rgba::new(1.0, 1.0, 1.0, 1.0)),
    (Color::WhiteSmoke, Rgba::new(0.9607843, 0.9607843, 0.9607843, 1.0)),
    (Color::Yellow, Rgba::new(1.0, 1.0, 0.0, 1.0)),
    (Color::YellowGreen, Rgba::new(0.6039216, 0.8039216, 0.19607843, 1.0)),
];

/// Inverse of `PALETTE` for the reverse lookup. `None`/`Transparent` are
/// left out so a transparent display value never maps back to a real name.
static INVERSE: Lazy<HashMap<[u32; 4], Color>> = Lazy::new(|| {
    let mut inverse = HashMap::with_capacity(PALETTE_SIZE);
    for (color, rgba) in PALETTE.iter().skip(2) {
        inverse.entry(rgba.key()).or_insert(*color);
    }
    inverse
});

impl Color {
    /// Every palette entry in discriminant order.
    pub fn all() -> impl Iterator<Item = Color> {
        PALETTE.iter().map(|(color, _)| *color)
    }

    /// Returns the concrete display value for this name.
    pub fn to_rgba(self) -> Rgba {
        PALETTE[self as usize].1
    }

    /// Reverse lookup by exact channel equality.
    ///
    /// Falls back to `Color::None` when nothing in the table matches.
    pub fn from_rgba(rgba: Rgba) -> Color {
        INVERSE.get(&rgba.key()).copied().unwrap_or(Color::None)
    }

    /// True for the two names that render as "no fill".
    pub fn is_none(self) -> bool {
        matches!(self, Color::None | Color::Transparent)
    }
}
