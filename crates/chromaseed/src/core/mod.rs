mod contrast;
mod conversion;
mod equality;
mod math;

// contrast
pub use contrast::{
    darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones, ratio_of_ys,
};

// conversion
pub use conversion::{
    argb_from_lab, argb_from_linrgb, argb_from_lstar, argb_from_xyz, delinearized, lab_from_argb,
    linearized, linrgb_from_argb, lstar_from_argb, lstar_from_y, xyz_from_argb, y_from_lstar,
    WHITE_POINT_D65,
};
pub(crate) use conversion::delinearized_unrounded;

// equality
pub use equality::{to_eq_bits, ROUNDING_FACTOR};

// math
pub use math::{difference_degrees, sanitize_degrees};
pub(crate) use math::{
    lerp, multiply, rotation_direction, round_half_up, sanitize_degrees_int, signum,
};
