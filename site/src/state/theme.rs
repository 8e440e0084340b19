//! Light/dark display mode and its distribution through context.
//!
//! DESIGN
//! ======
//! The root container is the only writer. It creates the signal, keeps the
//! write half private, and provides a [`ThemeContext`] carrying the read half
//! plus a toggle capability. Descendants can observe the flag and ask for a
//! flip; they cannot set an arbitrary value.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::palette::{DARK, LIGHT, Palette};
use crate::util::theme_dom;

/// Display mode. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeFlag {
    #[default]
    Light,
    Dark,
}

impl ThemeFlag {
    /// The other mode. Applying it twice returns the original value.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            ThemeFlag::Light => ThemeFlag::Dark,
            ThemeFlag::Dark => ThemeFlag::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, ThemeFlag::Dark)
    }

    /// Value written to the `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeFlag::Light => "light",
            ThemeFlag::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            ThemeFlag::Light => &LIGHT,
            ThemeFlag::Dark => &DARK,
        }
    }

    /// Label for the toggle control: what pressing it switches to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            ThemeFlag::Light => "Switch to dark mode",
            ThemeFlag::Dark => "Switch to light mode",
        }
    }
}

/// Read-only theme flag plus the capability to request a flip.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    flag: ReadSignal<ThemeFlag>,
    toggle: Callback<()>,
}

impl ThemeContext {
    /// Create the theme state starting at `initial` and provide it to descendants.
    ///
    /// Call once, from the root component.
    pub fn provide(initial: ThemeFlag) -> Self {
        let (flag, set_flag) = signal(initial);
        let toggle = Callback::new(move |()| {
            set_flag.update(|f| *f = f.toggled());
            theme_dom::apply(flag.get_untracked());
        });
        let ctx = Self { flag, toggle };
        provide_context(ctx);
        ctx
    }

    /// Current flag (tracked).
    pub fn flag(&self) -> ThemeFlag {
        self.flag.get()
    }

    /// Current palette (tracked).
    pub fn palette(&self) -> &'static Palette {
        self.flag.get().palette()
    }

    pub fn signal(&self) -> ReadSignal<ThemeFlag> {
        self.flag
    }

    pub fn toggle(&self) {
        self.toggle.run(());
    }
}

/// The [`ThemeContext`] provided by the root component.
///
/// # Panics
///
/// Panics when called outside the tree rooted at `App`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
