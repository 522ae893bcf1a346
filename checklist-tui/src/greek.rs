//! Greek letters, the items of the example host.

use std::rc::Rc;

use checklist::{Item, ItemRef, SelectedFlag};

const LETTERS: [&str; 24] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega",
];

#[derive(Debug, Clone)]
pub struct GreekLetter {
    name: &'static str,
    selected: SelectedFlag,
}

impl GreekLetter {
    pub fn new(name: &'static str, selected: bool) -> Self {
        Self {
            name,
            selected: SelectedFlag::new(selected),
        }
    }
}

impl Item for GreekLetter {
    fn display_string(&self) -> String {
        self.name.to_string()
    }

    fn is_selected(&self) -> bool {
        self.selected.get()
    }

    fn set_selected(&self, selected: bool) {
        self.selected.set(selected);
    }
}

/// The 24 letters, Alpha to Omega, with Gamma selected.
pub fn greek_letters() -> Vec<ItemRef<GreekLetter>> {
    LETTERS
        .iter()
        .map(|&name| Rc::new(GreekLetter::new(name, name == "Gamma")))
        .collect()
}

/// Describe the selected letters as a sentence.
pub fn summary<T: Item>(items: &[ItemRef<T>]) -> String {
    let names: Vec<String> = items
        .iter()
        .filter(|item| item.is_selected())
        .map(|item| item.display_string())
        .collect();

    match names.as_slice() {
        [] => "No greek letters were selected.".to_string(),
        [only] => format!("{} was selected.", only),
        [first, second] => format!("{} and {} were selected.", first, second),
        [rest @ .., last] => format!("{}, and {} were selected.", rest.join(", "), last),
    }
}
