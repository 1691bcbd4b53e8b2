//! State-aware colors.

use chromaset_color::Rgba;
use chromaset_config::SchemeConfig;

use crate::effects::StateEffects;
use crate::resolve::ResolvedColorSet;
use crate::roles::{BackgroundRole, ColorSetKind, DecorationRole, ForegroundRole, WidgetState};

/// One color per widget state.
///
/// Useful for colors that are not part of a color set but should still look
/// right when their widget is inactive or disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatefulBrush {
    colors: [Rgba; 3],
}

impl StatefulBrush {
    /// The same color in every state.
    #[must_use]
    pub const fn uniform(color: Rgba) -> Self {
        Self { colors: [color; 3] }
    }

    fn from_fn(mut f: impl FnMut(WidgetState) -> Rgba) -> Self {
        Self {
            colors: WidgetState::ALL.map(&mut f),
        }
    }

    /// A foreground role of `kind`, resolved in every state.
    #[must_use]
    pub fn foreground(kind: ColorSetKind, role: ForegroundRole, config: Option<&SchemeConfig>) -> Self {
        Self::from_fn(|state| ResolvedColorSet::resolve(kind, state, config).foreground(role))
    }

    /// A background role of `kind`, resolved in every state.
    #[must_use]
    pub fn background(kind: ColorSetKind, role: BackgroundRole, config: Option<&SchemeConfig>) -> Self {
        Self::from_fn(|state| ResolvedColorSet::resolve(kind, state, config).background(role))
    }

    /// A decoration role of `kind`, resolved in every state.
    #[must_use]
    pub fn decoration(kind: ColorSetKind, role: DecorationRole, config: Option<&SchemeConfig>) -> Self {
        Self::from_fn(|state| ResolvedColorSet::resolve(kind, state, config).decoration(role))
    }

    /// An arbitrary background color, with the scheme's state effects.
    #[must_use]
    pub fn from_background(color: Rgba, config: Option<&SchemeConfig>) -> Self {
        Self::from_fn(|state| StateEffects::new(state, config).brush(color))
    }

    /// An arbitrary foreground color drawn on `background`, with the
    /// scheme's state effects.
    #[must_use]
    pub fn from_foreground(color: Rgba, background: Rgba, config: Option<&SchemeConfig>) -> Self {
        Self::from_fn(|state| StateEffects::new(state, config).brush_foreground(color, background))
    }

    /// The color for `state`.
    #[inline]
    #[must_use]
    pub const fn brush(&self, state: WidgetState) -> Rgba {
        self.colors[state as usize]
    }
}

impl Default for StatefulBrush {
    fn default() -> Self {
        Self::uniform(Rgba::TRANSPARENT)
    }
}
