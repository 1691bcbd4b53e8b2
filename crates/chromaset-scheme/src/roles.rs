//! Color sets, widget states, and color roles.
//!
//! Every enum here has a dense index (`as usize`) matching its declaration
//! order, and a `from_index` constructor for callers that carry roles as
//! integers. Out-of-range indices never fail: roles clamp to the first role
//! of their category, and color sets fall back to [`ColorSetKind::View`] with
//! a logged diagnostic.

/// A UI context with its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSetKind {
    /// Views: item lists, text entries, and other content areas.
    #[default]
    View,
    /// Non-editable window chrome, such as menus and dialog backgrounds.
    Window,
    /// Push buttons and other clickable controls.
    Button,
    /// Selected items in views.
    Selection,
    /// Tooltips and "What's This?" popups.
    Tooltip,
    /// Areas that contrast with the rest of the scheme (e.g. dark panels
    /// inside a light scheme).
    Complementary,
    /// Window headers and title areas.
    Header,
}

impl ColorSetKind {
    /// All color sets in index order.
    pub const ALL: [Self; 7] = [
        Self::View,
        Self::Window,
        Self::Button,
        Self::Selection,
        Self::Tooltip,
        Self::Complementary,
        Self::Header,
    ];

    /// Validate a raw color set index.
    ///
    /// An out-of-range index is a caller bug; it logs a warning and resolves
    /// as [`ColorSetKind::View`].
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match Self::ALL.get(index) {
            Some(kind) => *kind,
            None => {
                tracing::warn!(index, "invalid color set index, using View");
                Self::View
            }
        }
    }

    /// Scheme file group holding this set's colors.
    #[must_use]
    pub const fn config_group(self) -> &'static str {
        match self {
            Self::View => "Colors:View",
            Self::Window => "Colors:Window",
            Self::Button => "Colors:Button",
            Self::Selection => "Colors:Selection",
            Self::Tooltip => "Colors:Tooltip",
            Self::Complementary => "Colors:Complementary",
            Self::Header => "Colors:Header",
        }
    }

    /// Lowercase name used on the command line and in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Window => "window",
            Self::Button => "button",
            Self::Selection => "selection",
            Self::Tooltip => "tooltip",
            Self::Complementary => "complementary",
            Self::Header => "header",
        }
    }

    /// Inverse of [`name`](Self::name), case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Interaction state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidgetState {
    /// Widget in the focused window.
    #[default]
    Active,
    /// Widget in a window without focus.
    Inactive,
    /// Widget that cannot be interacted with.
    Disabled,
}

impl WidgetState {
    /// All states in index order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Disabled];

    /// Clamp a raw index; out-of-range values become `Active`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::Active)
    }

    /// Lowercase name used on the command line and in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Disabled => "disabled",
        }
    }

    /// Inverse of [`name`](Self::name), case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Generates a role enum with `ALL`, `COUNT`, `index`, clamping `from_index`,
/// the scheme file key (if stored), and a display name.
macro_rules! role_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal $(, key = $key:literal)? ; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All roles in index order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
            /// Number of roles.
            pub const COUNT: usize = Self::ALL.len();

            /// Dense index of this role.
            #[inline]
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Clamp a raw index; out-of-range values map to the first role.
            #[must_use]
            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or(Self::ALL[0])
            }

            /// Lowercase display name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            /// Scheme file key for roles that are stored, `None` for derived
            /// roles.
            #[must_use]
            pub const fn config_key(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => role_enum!(@key $($key)?), )+
                }
            }
        }
    };
    (@key $key:literal) => { Some($key) };
    (@key) => { None };
}

role_enum! {
    /// Foreground (text) roles.
    ForegroundRole {
        /// Regular text.
        Normal => "normal", key = "ForegroundNormal";
        /// Text that should be de-emphasized (comments, placeholders).
        Inactive => "inactive", key = "ForegroundInactive";
        /// Text that is currently active or hovered.
        Active => "active", key = "ForegroundActive";
        /// Links.
        Link => "link", key = "ForegroundLink";
        /// Visited links.
        Visited => "visited", key = "ForegroundVisited";
        /// Errors and destructive actions.
        Negative => "negative", key = "ForegroundNegative";
        /// Warnings and notices.
        Neutral => "neutral", key = "ForegroundNeutral";
        /// Success and safe actions.
        Positive => "positive", key = "ForegroundPositive";
    }
}

role_enum! {
    /// Background roles. Only `Normal` and `Alternate` are stored; the rest
    /// are derived from them and the matching foreground.
    BackgroundRole {
        /// Regular background.
        Normal => "normal", key = "BackgroundNormal";
        /// Alternating rows in lists.
        Alternate => "alternate", key = "BackgroundAlternate";
        /// Derived from the active text color.
        Active => "active";
        /// Derived from the link color.
        Link => "link";
        /// Derived from the visited link color.
        Visited => "visited";
        /// Derived from the negative text color.
        Negative => "negative";
        /// Derived from the neutral text color.
        Neutral => "neutral";
        /// Derived from the positive text color.
        Positive => "positive";
    }
}

role_enum! {
    /// Decoration roles: accents drawn around or under items.
    DecorationRole {
        /// Focus indicator.
        Focus => "focus", key = "DecorationFocus";
        /// Hover indicator.
        Hover => "hover", key = "DecorationHover";
    }
}

role_enum! {
    /// Bevel shades for drawing 3D frames, lightest to darkest on a
    /// mid-luma base.
    ShadeRole {
        /// Lightest shade.
        Light => "light";
        /// Between `Light` and the base.
        Midlight => "midlight";
        /// Between the base and `Dark`.
        Mid => "mid";
        /// Dark shade.
        Dark => "dark";
        /// Darkest shade, for drop shadows.
        Shadow => "shadow";
    }
}

impl BackgroundRole {
    /// The foreground role a derived background is tinted toward.
    #[must_use]
    pub const fn derived_from(self) -> Option<ForegroundRole> {
        match self {
            Self::Normal | Self::Alternate => None,
            Self::Active => Some(ForegroundRole::Active),
            Self::Link => Some(ForegroundRole::Link),
            Self::Visited => Some(ForegroundRole::Visited),
            Self::Negative => Some(ForegroundRole::Negative),
            Self::Neutral => Some(ForegroundRole::Neutral),
            Self::Positive => Some(ForegroundRole::Positive),
        }
    }
}
