use serde::Serialize;

/// Chromaticity pair in the bridge's native color space. Serializes as the
/// two-element array the `xy` state field expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorPoint(pub f64, pub f64);

const BUILTIN_COLORS: &[(&str, ColorPoint)] = &[
    ("DEFAULT", ColorPoint(0.4571, 0.4097)),
    ("RED", ColorPoint(0.6915, 0.3083)),
    ("GREEN", ColorPoint(0.0139, 0.7502)),
    ("BLUE", ColorPoint(0.1096, 0.0868)),
    ("PURPLE", ColorPoint(0.1611, 0.0138)),
    ("ORANGE", ColorPoint(0.5752, 0.4242)),
    ("YELLOW", ColorPoint(0.5125, 0.4866)),
];

/// Fixed name -> chromaticity table, matched case-insensitively. Passed into
/// the color handler as a value so tests can inject fixture tables.
#[derive(Debug, Clone)]
pub struct ColorTable {
    entries: Vec<(String, ColorPoint)>,
}

impl ColorTable {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_COLORS
                .iter()
                .map(|(name, point)| (name.to_string(), *point))
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn from_entries(entries: Vec<(String, ColorPoint)>) -> Self {
        Self { entries }
    }

    /// Look up a color name. Input is upper-cased before matching.
    pub fn get(&self, name: &str) -> Option<ColorPoint> {
        let name = name.to_uppercase();
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, point)| *point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = ColorTable::builtin();
        assert_eq!(table.get("red"), table.get("RED"));
        assert_eq!(table.get("Red"), Some(ColorPoint(0.6915, 0.3083)));
    }

    #[test]
    fn test_unknown_color_returns_none() {
        let table = ColorTable::builtin();
        assert_eq!(table.get("ultraviolet"), None);
    }

    #[test]
    fn test_builtin_table_has_default() {
        let table = ColorTable::builtin();
        assert_eq!(table.get("default"), Some(ColorPoint(0.4571, 0.4097)));
    }

    #[test]
    fn test_fixture_table() {
        let table = ColorTable::from_entries(vec![("TEAL".into(), ColorPoint(0.2, 0.3))]);
        assert_eq!(table.get("teal"), Some(ColorPoint(0.2, 0.3)));
        assert_eq!(table.get("red"), None);
    }
}
