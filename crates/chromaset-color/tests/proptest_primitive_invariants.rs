//! Property-based invariants for the color primitives.
//!
//! 1. **Luma bounds**: `luma` is always within `[0, 1]`.
//! 2. **Direction**: `darken` never raises luma, `lighten` never lowers it,
//!    and `shade` moves luma in the sign of its amount.
//! 3. **Monotone shade**: a larger shade amount never yields a darker color.
//! 4. **Tint fixpoint**: tinting a color toward itself leaves it unchanged
//!    (up to one 8-bit step).
//! 5. **Alpha passthrough**: luma adjustments keep the alpha channel.
//!
//! Results are rounded to 8 bits, so luma comparisons carry a small slack.

use chromaset_color::{Rgba, contrast_ratio, darken, lighten, luma, mix, shade, tint};
use proptest::prelude::*;

const SLACK: f64 = 0.02;

fn any_rgba() -> impl Strategy<Value = Rgba> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(r, g, b, a)| Rgba::rgba(r, g, b, a))
}

fn any_opaque() -> impl Strategy<Value = Rgba> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgba::rgb(r, g, b))
}

proptest! {
    #[test]
    fn luma_is_unit_bounded(color in any_rgba()) {
        let y = luma(color);
        prop_assert!((0.0..=1.0 + 1e-9).contains(&y));
    }

    #[test]
    fn darken_never_brightens(color in any_opaque(), ky in 0.0f64..1.0, kc in 0.0f64..1.0) {
        prop_assert!(luma(darken(color, ky, kc)) <= luma(color) + SLACK);
    }

    #[test]
    fn lighten_never_darkens(color in any_opaque(), ky in 0.0f64..1.0, kc in 0.0f64..1.0) {
        prop_assert!(luma(lighten(color, ky, kc)) + SLACK >= luma(color));
    }

    #[test]
    fn shade_follows_amount_sign(color in any_opaque(), ky in -1.0f64..1.0) {
        let shaded = luma(shade(color, ky, 1.0));
        if ky >= 0.0 {
            prop_assert!(shaded + SLACK >= luma(color));
        } else {
            prop_assert!(shaded <= luma(color) + SLACK);
        }
    }

    #[test]
    fn shade_is_monotone_in_amount(color in any_opaque(), a in -1.0f64..1.0, b in -1.0f64..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(luma(shade(color, lo, 1.0)) <= luma(shade(color, hi, 1.0)) + SLACK);
    }

    #[test]
    fn tint_toward_self_is_a_fixpoint(base in any_opaque(), amount in 0.0f64..1.0) {
        let tinted = tint(base, base, amount);
        let distance = base
            .r()
            .abs_diff(tinted.r())
            .max(base.g().abs_diff(tinted.g()))
            .max(base.b().abs_diff(tinted.b()));
        prop_assert!(distance <= 1, "{} tinted toward itself became {}", base, tinted);
    }

    #[test]
    fn contrast_ratio_is_symmetric(a in any_opaque(), b in any_opaque()) {
        prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        prop_assert!(contrast_ratio(a, b) >= 1.0);
    }

    #[test]
    fn luma_adjustments_keep_alpha(color in any_rgba(), k in 0.0f64..1.0) {
        prop_assert_eq!(darken(color, k, 1.0).a(), color.a());
        prop_assert_eq!(lighten(color, k, 1.0).a(), color.a());
        prop_assert_eq!(shade(color, k, 1.0).a(), color.a());
    }

    #[test]
    fn mix_of_a_color_with_itself_is_identity(color in any_opaque(), bias in 0.0f64..1.0) {
        prop_assert_eq!(mix(color, color, bias), color);
    }
}
