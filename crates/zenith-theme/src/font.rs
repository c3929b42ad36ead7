//! Font scale tiers.

use zenith_core::FontScale;

/// One row of the font scale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontTier {
    /// Class applied to the document body
    pub body_class: &'static str,
    /// Value of `--font-size-base`
    pub font_size: &'static str,
    /// Value of `--line-height-base`
    pub line_height: &'static str,
}

pub const SMALL: FontTier = FontTier {
    body_class: "text-sm",
    font_size: "0.875rem",
    line_height: "1.25rem",
};

pub const MEDIUM: FontTier = FontTier {
    body_class: "text-base",
    font_size: "1rem",
    line_height: "1.5rem",
};

pub const LARGE: FontTier = FontTier {
    body_class: "text-lg",
    font_size: "1.125rem",
    line_height: "1.75rem",
};

/// Every tier, smallest first.
pub const TIERS: [FontTier; 3] = [SMALL, MEDIUM, LARGE];

/// The tier for `scale`.
pub fn font_tier(scale: FontScale) -> &'static FontTier {
    match scale {
        FontScale::Small => &SMALL,
        FontScale::Medium => &MEDIUM,
        FontScale::Large => &LARGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_lookup() {
        assert_eq!(font_tier(FontScale::Small).body_class, "text-sm");
        assert_eq!(font_tier(FontScale::Medium).body_class, "text-base");
        assert_eq!(font_tier(FontScale::Large).body_class, "text-lg");
    }

    #[test]
    fn test_unknown_stored_scale_uses_medium_tier() {
        let scale: FontScale = serde_json::from_str("\"xl\"").unwrap();
        assert_eq!(font_tier(scale), &MEDIUM);
    }
}
