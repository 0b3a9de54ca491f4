mod assignment;
mod conflicts;
mod types;
mod util;

pub use types::{AssignOptions, Conflict, ConflictKind, SchedError};
pub use util::go_to_week;

use crate::model::{Employee, Role, Roster, Schedule, WeekAssignment};
use crate::notes::NoteStore;

/// Génère un planning complet à partir d'un effectif (fonction pure).
pub fn generate_schedule(roster: &Roster, opts: AssignOptions) -> Result<Schedule, SchedError> {
    assignment::generate(roster, opts)
}

/// Relève les anomalies d'un planning : doubles réservations, rôles vacants.
pub fn detect_conflicts(roster: &Roster, schedule: &Schedule) -> Vec<Conflict> {
    conflicts::detect_conflicts(roster, schedule)
}

/// Scheduler : effectif, planning courant, pointeur de semaine et notes.
///
/// Toute mutation de l'effectif régénère le planning en entier ; les notes,
/// indexées par (semaine, rôle), survivent aux régénérations.
#[derive(Debug)]
pub struct Scheduler {
    roster: Roster,
    schedule: Schedule,
    current_week: usize,
    notes: NoteStore,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_roster(Roster::default())
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster,
            schedule: Schedule::empty(),
            current_week: 1,
            notes: NoteStore::default(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }
    pub fn current_week(&self) -> usize {
        self.current_week
    }

    /// Affectations de la semaine courante.
    pub fn current_assignment(&self) -> Option<&WeekAssignment> {
        self.schedule.week(self.current_week)
    }

    /// Reconstruit le planning entier ; la semaine courante repasse à 1.
    pub fn regenerate(&mut self, opts: AssignOptions) -> Result<(), SchedError> {
        self.schedule = assignment::generate(&self.roster, opts)?;
        self.current_week = 1;
        Ok(())
    }

    // Régénération après mutation : seul échec possible, le roster vide ;
    // le planning précédent reste alors en place.
    fn regenerate_lenient(&mut self, opts: AssignOptions) {
        let _ = self.regenerate(opts);
    }

    /// Ajoute un employé (nom vierge ignoré, doublon refusé) puis régénère.
    pub fn add_employee(&mut self, name: &str, opts: AssignOptions) -> Result<(), SchedError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        if self.roster.contains_employee(name) {
            return Err(SchedError::DuplicateEmployee(name.to_string()));
        }
        self.roster.employees.push(Employee::new(name));
        self.regenerate_lenient(opts);
        Ok(())
    }

    /// Retire un employé ; l'absence du nom est un no-op.
    pub fn remove_employee(&mut self, name: &str, opts: AssignOptions) {
        let before = self.roster.employees.len();
        self.roster.employees.retain(|e| e.as_str() != name);
        if self.roster.employees.len() != before {
            self.regenerate_lenient(opts);
        }
    }

    /// Ajoute un rôle (libellé vierge ignoré, doublon refusé) puis régénère.
    pub fn add_role(&mut self, name: &str, opts: AssignOptions) -> Result<(), SchedError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        if self.roster.contains_role(name) {
            return Err(SchedError::DuplicateRole(name.to_string()));
        }
        self.roster.roles.push(Role::new(name));
        self.regenerate_lenient(opts);
        Ok(())
    }

    /// Retire un rôle ; l'absence du libellé est un no-op.
    pub fn remove_role(&mut self, name: &str, opts: AssignOptions) {
        let before = self.roster.roles.len();
        self.roster.roles.retain(|r| r.as_str() != name);
        if self.roster.roles.len() != before {
            self.regenerate_lenient(opts);
        }
    }

    /// Pose ou remplace la note d'un couple (semaine, rôle).
    pub fn set_note<T: Into<String>>(&mut self, week: usize, role: &str, text: T) {
        self.notes.set_note(week, Role::new(role), text);
    }

    /// Note d'un couple (semaine, rôle), `""` si absente.
    pub fn note(&self, week: usize, role: &str) -> &str {
        self.notes.note(week, &Role::new(role))
    }

    /// Déplace le pointeur de semaine (bornage, jamais d'erreur).
    pub fn go_to_week(&mut self, requested: i64) -> usize {
        self.current_week = util::go_to_week(requested, self.schedule.len());
        self.current_week
    }

    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        conflicts::detect_conflicts(&self.roster, &self.schedule)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
