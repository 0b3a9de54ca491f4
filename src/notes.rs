use crate::model::Role;
use std::collections::HashMap;

/// Notes libres indexées par (numéro de semaine, rôle).
///
/// Cycle de vie découplé du planning : la clé reste valable à travers les
/// régénérations tant que le libellé du rôle ne change pas. Aucune
/// vérification que la clé correspond à une semaine existante.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: HashMap<(usize, Role), String>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pose ou remplace une note.
    pub fn set_note<T: Into<String>>(&mut self, week: usize, role: Role, text: T) {
        self.notes.insert((week, role), text.into());
    }

    /// Texte mémorisé, `""` si absent.
    pub fn note(&self, week: usize, role: &Role) -> &str {
        self.notes
            .get(&(week, role.clone()))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes non vides d'une semaine, dans l'ordre des rôles fournis.
    pub fn notes_for_week<'a>(
        &'a self,
        week: usize,
        roles: &'a [Role],
    ) -> impl Iterator<Item = (&'a Role, &'a str)> {
        roles.iter().filter_map(move |role| {
            let text = self.note(week, role);
            (!text.is_empty()).then_some((role, text))
        })
    }
}
