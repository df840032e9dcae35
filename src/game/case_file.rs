//! The case file
//!
//! The associations the police already have on record when the detective
//! arrives: which suspect each clue in the mansion points to.

use crate::data::*;

/// A case: title, synopsis and the clue→suspect associations on record
#[derive(Debug, Clone)]
pub struct CaseFile {
    pub title: &'static str,
    pub synopsis: &'static str,
    pub associations: &'static [(&'static str, &'static str)],
}

/// The murder at the mansion
pub fn mansion_murder() -> CaseFile {
    CaseFile {
        title: "The Mansion Murder",
        synopsis: "A crime has been committed in the mansion. Explore the rooms, \
                   collect the clues and identify the culprit.",
        associations: &[
            ("Livro com páginas rasgadas", "Professora Helena"),
            ("Taça de vinho quebrada", "Mordomo James"),
            ("Carta anônima", "Sr. Ricardo"),
            ("Marca de sangue no tapete", "Mordomo James"),
            ("Faca com resíduos", "Chef Antoine"),
            ("Pegadas na lama", "Jardineiro Paulo"),
            ("Documento comprometedor", "Sr. Ricardo"),
            ("Cigarro apagado às pressas", "Mordomo James"),
            ("Veneno para ratos", "Chef Antoine"),
            ("Luvas sujas de terra", "Jardineiro Paulo"),
        ],
    }
}

impl CaseFile {
    /// Record every association in the index and catalog its clue.
    /// Returns the number of associations loaded.
    pub fn load_into(&self, suspects: &mut SuspectIndex, catalog: &mut ClueCatalog) -> usize {
        for (clue, suspect) in self.associations {
            suspects.insert(clue, suspect);
        }
        for (clue, _) in self.associations {
            catalog.insert(clue);
        }
        tracing::debug!(
            case = self.title,
            associations = self.associations.len(),
            "case file loaded"
        );
        self.associations.len()
    }
}
