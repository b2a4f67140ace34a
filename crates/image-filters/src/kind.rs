//! The recognized filter commands.

/// A named image transform a user can request via a photo caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Gaussian blur.
    Blur,
    /// Edge/contour emphasis.
    Contour,
    /// Quarter-turn rotation.
    Rotate,
    /// Binary segmentation by luminance threshold.
    Segment,
    /// Random salt-and-pepper noise.
    SaltAndPepper,
    /// Concatenate the image side by side with itself.
    Concat,
    /// Rotate applied twice in sequence.
    RotateTwice,
}

impl FilterKind {
    /// All recognized kinds, in caption order.
    pub const ALL: [FilterKind; 7] = [
        FilterKind::Blur,
        FilterKind::Contour,
        FilterKind::Rotate,
        FilterKind::Segment,
        FilterKind::SaltAndPepper,
        FilterKind::Concat,
        FilterKind::RotateTwice,
    ];

    /// Parse a photo caption into a filter kind.
    ///
    /// Matching is case- and surrounding-whitespace-insensitive; interior
    /// spacing is significant ("salt and pepper", "rotate 2").
    pub fn parse(caption: &str) -> Option<Self> {
        match caption.trim().to_lowercase().as_str() {
            "blur" => Some(Self::Blur),
            "contour" => Some(Self::Contour),
            "rotate" => Some(Self::Rotate),
            "segment" => Some(Self::Segment),
            "salt and pepper" => Some(Self::SaltAndPepper),
            "concat" => Some(Self::Concat),
            "rotate 2" => Some(Self::RotateTwice),
            _ => None,
        }
    }

    /// The caption that selects this kind.
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Contour => "contour",
            Self::Rotate => "rotate",
            Self::Segment => "segment",
            Self::SaltAndPepper => "salt and pepper",
            Self::Concat => "concat",
            Self::RotateTwice => "rotate 2",
        }
    }

    /// A short identifier usable in file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Contour => "contour",
            Self::Rotate => "rotate",
            Self::Segment => "segment",
            Self::SaltAndPepper => "salt_and_pepper",
            Self::Concat => "concat",
            Self::RotateTwice => "rotate2",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.caption())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_captions() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::parse(kind.caption()), Some(kind));
        }
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        assert_eq!(FilterKind::parse("Blur"), Some(FilterKind::Blur));
        assert_eq!(FilterKind::parse(" blur "), Some(FilterKind::Blur));
        assert_eq!(FilterKind::parse("BLUR"), Some(FilterKind::Blur));
        assert_eq!(
            FilterKind::parse("Salt And Pepper"),
            Some(FilterKind::SaltAndPepper)
        );
        assert_eq!(FilterKind::parse("ROTATE 2"), Some(FilterKind::RotateTwice));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(FilterKind::parse("sharpen"), None);
        assert_eq!(FilterKind::parse(""), None);
        assert_eq!(FilterKind::parse("rotate  2"), None);
    }
}
