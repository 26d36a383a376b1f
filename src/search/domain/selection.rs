use serde::Serialize;

/// The user's drill-down path through form -> strength -> packing.
///
/// Picking a level clears every level below it. Nothing here is checked
/// against the current payload, so a selection can outlive the result it was
/// made against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    form: Option<String>,
    strength: Option<String>,
    packing: Option<String>,
}

impl Selection {
    pub fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }

    pub fn strength(&self) -> Option<&str> {
        self.strength.as_deref()
    }

    pub fn packing(&self) -> Option<&str> {
        self.packing.as_deref()
    }

    pub fn select_form(&mut self, form: impl Into<String>) {
        self.form = Some(form.into());
        self.strength = None;
        self.packing = None;
    }

    pub fn select_strength(&mut self, strength: impl Into<String>) {
        self.strength = Some(strength.into());
        self.packing = None;
    }

    pub fn select_packing(&mut self, packing: impl Into<String>) {
        self.packing = Some(packing.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Selection {
        let mut selection = Selection::default();
        selection.select_form("tablet");
        selection.select_strength("500mg");
        selection.select_packing("strip-10");
        selection
    }

    #[test]
    fn test_default_is_empty() {
        let selection = Selection::default();
        assert_eq!(selection.form(), None);
        assert_eq!(selection.strength(), None);
        assert_eq!(selection.packing(), None);
    }

    #[test]
    fn test_selecting_form_clears_strength_and_packing() {
        let mut selection = full();
        selection.select_form("syrup");
        assert_eq!(selection.form(), Some("syrup"));
        assert_eq!(selection.strength(), None);
        assert_eq!(selection.packing(), None);
    }

    #[test]
    fn test_reselecting_same_form_still_clears() {
        let mut selection = full();
        selection.select_form("tablet");
        assert_eq!(selection.strength(), None);
        assert_eq!(selection.packing(), None);
    }

    #[test]
    fn test_selecting_strength_clears_packing_only() {
        let mut selection = full();
        selection.select_strength("650mg");
        assert_eq!(selection.form(), Some("tablet"));
        assert_eq!(selection.strength(), Some("650mg"));
        assert_eq!(selection.packing(), None);
    }

    #[test]
    fn test_selecting_packing_keeps_all_three() {
        let selection = full();
        assert_eq!(selection.form(), Some("tablet"));
        assert_eq!(selection.strength(), Some("500mg"));
        assert_eq!(selection.packing(), Some("strip-10"));
    }

    #[test]
    fn test_strength_without_form_is_allowed() {
        let mut selection = Selection::default();
        selection.select_strength("10mg");
        assert_eq!(selection.form(), None);
        assert_eq!(selection.strength(), Some("10mg"));
    }
}
