//! Dynamic color schemes.
//!
//! A [`DynamicScheme`] assigns a color to every [`Role`]. Creating one is a
//! two-step process. First, the scheme's [`Variant`] derives six tonal
//! palettes from the source color. Second, each role's [`DynamicColor`] picks
//! a palette and a tone, adjusting the tone until it meets the role's contrast
//! requirements against its background at the scheme's contrast level.

mod contrast_curve;
mod dynamic_color;
mod material_colors;
mod role;
mod scheme;
mod tone_delta_pair;
mod variant;

pub use contrast_curve::ContrastCurve;
pub use dynamic_color::{
    foreground_tone, tone_prefers_light_foreground, BackgroundFn, DynamicColor, ToneFn,
};
pub use material_colors::{find_desired_chroma_by_tone, material_color};
pub use role::{Role, RoleIterator};
pub use scheme::{DynamicScheme, PaletteKind, SchemeBasis, SchemeConfig};
pub use tone_delta_pair::{ToneDeltaPair, TonePolarity};
pub use variant::{
    ChromaRule, HueRule, PaletteRule, Variant, VariantRules, ERROR_CHROMA, ERROR_HUE,
    VARIANT_RULES,
};
