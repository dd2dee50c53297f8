//! Theme flag shared by every section

/// Theme mode
///
/// The only piece of state read by more than one component. It starts
/// from the platform's color-scheme preference and afterwards changes
/// only through [`ThemeMode::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolve the initial mode from a `prefers-color-scheme: dark` query.
    ///
    /// `None` means the platform could not answer and falls back to light.
    pub fn from_preference(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(true) => ThemeMode::Dark,
            Some(false) | None => ThemeMode::Light,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Choose between a light and a dark variant.
    pub fn pick<T>(&self, light: T, dark: T) -> T {
        match self {
            ThemeMode::Light => light,
            ThemeMode::Dark => dark,
        }
    }

    /// Class list of the root container; only dark mode adds a marker.
    pub fn root_class(&self) -> &'static str {
        self.pick("app", "app dark")
    }

    /// Accessible label for the toggle, naming the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        self.pick("Switch to dark mode", "Switch to light mode")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_from_preference() {
        assert_eq!(ThemeMode::from_preference(Some(true)), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_preference(Some(false)), ThemeMode::Light);
        assert_eq!(ThemeMode::from_preference(None), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggle(), mode);
            assert_eq!(mode.toggle().toggle(), mode);
        }
    }

    #[test]
    fn test_root_class_marks_only_dark() {
        assert!(!ThemeMode::Light.root_class().contains("dark"));
        assert_eq!(ThemeMode::Dark.root_class(), "app dark");
    }

    #[test]
    fn test_toggle_label_names_target() {
        assert_eq!(ThemeMode::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(ThemeMode::Dark.toggle_label(), "Switch to light mode");
    }
}
