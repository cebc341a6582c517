//! Colouring for the text renderers.
//!
//! Path and line listings highlight four things: station names, line names,
//! distances, and the `+`/`|`/`-` step markers. A [`ColorPalette`] maps each of
//! those roles to an escape sequence, or to nothing when colour is off.

/// Escape sequences assigned to each highlighted role.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Station names.
    pub const STATION: &str = "\x1b[1;97m";
    /// Step markers in path listings.
    pub const MARKER: &str = "\x1b[90m";
    /// Section distances and line totals.
    pub const DISTANCE: &str = "\x1b[32m";
    /// Line names.
    pub const LINE: &str = "\x1b[36m";
}

/// Per-role escape sequences handed to the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub station: &'static str,
    pub marker: &'static str,
    pub distance: &'static str,
    pub line: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            station: colors::STATION,
            marker: colors::MARKER,
            distance: colors::DISTANCE,
            line: colors::LINE,
        }
    }

    /// Palette used for pipes, files and tests: every role renders bare.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            station: "",
            marker: "",
            distance: "",
            line: "",
        }
    }

    /// Pick a palette for the current process environment.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// `false` when `NO_COLOR` is set or `TERM` is `dumb`.
#[must_use]
pub fn supports_color() -> bool {
    color_allowed(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("TERM").ok().as_deref(),
    )
}

fn color_allowed(no_color: bool, term: Option<&str>) -> bool {
    !no_color && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}
