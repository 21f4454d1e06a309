// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the splash chrome.
//!
//! - **Palette**: base colors, including the neon scheme of the progress bar
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Dark surfaces behind the overlay and inside the track
    pub const SURFACE_900: Color = Color::from_rgb(0.05, 0.05, 0.05);
    pub const TRACK_DEEP: Color = Color::from_rgb(0.051, 0.051, 0.051); // #0D0D0D
    pub const TRACK_NAVY: Color = Color::from_rgb(0.102, 0.102, 0.18); // #1A1A2E

    // Neon scheme of the liquid fill, leading to trailing
    pub const NEON_CYAN: Color = Color::from_rgb(0.0, 1.0, 1.0); // #00FFFF
    pub const NEON_AZURE: Color = Color::from_rgb(0.0, 0.5, 1.0); // #0080FF
    pub const NEON_VIOLET: Color = Color::from_rgb(0.5, 0.0, 1.0); // #8000FF
    pub const NEON_ROSE: Color = Color::from_rgb(1.0, 0.0, 0.5); // #FF0080
    pub const NEON_EMBER: Color = Color::from_rgb(1.0, 0.25, 0.0); // #FF4000

    // Accents used by particles and the plasma border
    pub const NEON_MAGENTA: Color = Color::from_rgb(1.0, 0.0, 1.0); // #FF00FF
    pub const NEON_AMBER: Color = Color::from_rgb(1.0, 1.0, 0.0); // #FFFF00
    pub const NEON_SPRING: Color = Color::from_rgb(0.0, 1.0, 0.5); // #00FF80

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Panel behind the label and progress bar.
    pub const PANEL: f32 = 0.22;
    /// Backdrop dimming over the splash background.
    pub const BACKDROP: f32 = 0.45;
    /// Scrim over the content surface while the page is not ready.
    pub const CONTENT_DIM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 14.0; // label / bar gap
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 36.0; // logo / panel gap
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Diameter of the pulsing logo mark at scale 1.0.
    pub const LOGO: f32 = 144.0;

    /// Height of the progress bar track.
    pub const BAR_HEIGHT: f32 = 10.0;

    /// Width of the progress bar track.
    pub const BAR_WIDTH: f32 = 240.0;

    /// Width cap of the overlay panel.
    pub const PANEL_MAX_WIDTH: f32 = 300.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Loading percentage label.
    pub const LABEL_LG: f32 = 24.0;

    /// Failure and offline banners.
    pub const BODY: f32 = 16.0;

    /// Start URL hint on the content placeholder.
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const PANEL: f32 = 14.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CONTENT_DIM > 0.0 && opacity::CONTENT_DIM < 1.0);
    assert!(opacity::PANEL < opacity::BACKDROP);

    // Sizing validation
    assert!(sizing::BAR_WIDTH > sizing::BAR_HEIGHT);
    assert!(sizing::PANEL_MAX_WIDTH > sizing::BAR_WIDTH);

    // Typography validation
    assert!(typography::LABEL_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neon_scheme_colors_are_distinct() {
        let scheme = [
            palette::NEON_CYAN,
            palette::NEON_AZURE,
            palette::NEON_VIOLET,
            palette::NEON_ROSE,
            palette::NEON_EMBER,
        ];
        for (i, a) in scheme.iter().enumerate() {
            for b in scheme.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn content_dim_matches_not_ready_opacity() {
        assert_eq!(opacity::CONTENT_DIM, 0.5);
    }
}
