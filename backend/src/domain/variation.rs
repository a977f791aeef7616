//! Style variations: fixed bundles of typography, radius, spacing, shadow and
//! motion constants shared by every renderer.

use shared::{SpacingScale, Variation, VariationStyles};

/// Style bundle for a variation name; unknown or absent names get "modern"
pub fn resolve_variation(name: Option<&str>) -> VariationStyles {
    let variation = name
        .and_then(|name| name.parse::<Variation>().ok())
        .unwrap_or_default();
    variation_styles(variation)
}

pub fn variation_styles(variation: Variation) -> VariationStyles {
    match variation {
        Variation::Modern => VariationStyles {
            variation,
            heading_weight: 700,
            body_weight: 400,
            letter_spacing: "-0.02em".to_string(),
            border_radius: "0.75rem".to_string(),
            button_radius: "0.5rem".to_string(),
            spacing: spacing(["0.25rem", "0.5rem", "1rem", "1.5rem", "2rem"]),
            shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"
                .to_string(),
            hover_shadow: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)"
                .to_string(),
            hover_transform: "translateY(-2px)".to_string(),
            animation_duration: "300ms".to_string(),
            transition_timing: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
        },
        Variation::Classic => VariationStyles {
            variation,
            heading_weight: 600,
            body_weight: 400,
            letter_spacing: "0".to_string(),
            border_radius: "0.25rem".to_string(),
            button_radius: "0.25rem".to_string(),
            spacing: spacing(["0.25rem", "0.75rem", "1.25rem", "2rem", "3rem"]),
            shadow: "0 1px 3px rgba(0, 0, 0, 0.12), 0 1px 2px rgba(0, 0, 0, 0.24)".to_string(),
            hover_shadow: "0 3px 6px rgba(0, 0, 0, 0.16), 0 3px 6px rgba(0, 0, 0, 0.23)"
                .to_string(),
            hover_transform: "none".to_string(),
            animation_duration: "200ms".to_string(),
            transition_timing: "ease-in-out".to_string(),
        },
        Variation::Minimal => VariationStyles {
            variation,
            heading_weight: 500,
            body_weight: 300,
            letter_spacing: "0.01em".to_string(),
            border_radius: "0".to_string(),
            button_radius: "0".to_string(),
            spacing: spacing(["0.5rem", "1rem", "1.5rem", "2.5rem", "4rem"]),
            shadow: "none".to_string(),
            hover_shadow: "none".to_string(),
            hover_transform: "none".to_string(),
            animation_duration: "150ms".to_string(),
            transition_timing: "linear".to_string(),
        },
        Variation::Vibrant => VariationStyles {
            variation,
            heading_weight: 800,
            body_weight: 500,
            letter_spacing: "-0.01em".to_string(),
            border_radius: "1.5rem".to_string(),
            button_radius: "9999px".to_string(),
            spacing: spacing(["0.25rem", "0.5rem", "1rem", "1.75rem", "2.5rem"]),
            shadow: "0 10px 25px -5px rgba(0, 0, 0, 0.2)".to_string(),
            hover_shadow: "0 20px 35px -10px rgba(0, 0, 0, 0.3)".to_string(),
            hover_transform: "translateY(-4px) scale(1.02)".to_string(),
            animation_duration: "400ms".to_string(),
            transition_timing: "cubic-bezier(0.34, 1.56, 0.64, 1)".to_string(),
        },
    }
}

fn spacing([xs, sm, md, lg, xl]: [&str; 5]) -> SpacingScale {
    SpacingScale {
        xs: xs.to_string(),
        sm: sm.to_string(),
        md: md.to_string(),
        lg: lg.to_string(),
        xl: xl.to_string(),
    }
}
