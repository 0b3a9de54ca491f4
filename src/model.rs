use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Rôles d'entretien proposés par défaut.
pub const DEFAULT_ROLES: [&str; 7] = [
    "Floors",
    "Trash",
    "Bathrooms",
    "Kitchen",
    "Dusting",
    "Windows",
    "Maintenance",
];

/// Employé : le nom fait office d'identité (unicité garantie par le Roster).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee(String);

impl Employee {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rôle de corvée (identifié par son libellé).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role(String);

impl Role {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Affectations d'une semaine : rôle → employé.
///
/// Construite d'un bloc par la génération, jamais retouchée ensuite
/// (remplacée en entier à chaque régénération).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAssignment {
    assignments: HashMap<Role, Employee>,
}

impl WeekAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, role: Role, employee: Employee) {
        self.assignments.insert(role, employee);
    }

    pub fn employee_for(&self, role: &Role) -> Option<&Employee> {
        self.assignments.get(role)
    }

    pub fn contains_role(&self, role: &Role) -> bool {
        self.assignments.contains_key(role)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Role, &Employee)> {
        self.assignments.iter()
    }
}

/// Identifiant fort d'une génération de planning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(String);

impl ScheduleId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Planning complet : suite ordonnée de semaines, numérotées à partir de 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    weeks: Vec<WeekAssignment>,
}

impl Schedule {
    pub fn new(weeks: Vec<WeekAssignment>) -> Self {
        Self {
            id: ScheduleId::random(),
            weeks,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Semaine `number` (numérotation 1..N).
    pub fn week(&self, number: usize) -> Option<&WeekAssignment> {
        number.checked_sub(1).and_then(|i| self.weeks.get(i))
    }

    pub fn weeks(&self) -> &[WeekAssignment] {
        &self.weeks
    }

    /// Jour de départ de la semaine `number`, à compter de `start`.
    pub fn week_start(start: NaiveDate, number: usize) -> NaiveDate {
        start + Duration::weeks(number.saturating_sub(1) as i64)
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::empty()
    }
}

/// Effectif courant : employés et rôles, dans leur ordre de déclaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub employees: Vec<Employee>,
    pub roles: Vec<Role>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>, roles: Vec<Role>) -> Self {
        Self { employees, roles }
    }

    /// Roster vide muni du jeu de rôles par défaut.
    pub fn with_default_roles() -> Self {
        Self {
            employees: Vec::new(),
            roles: DEFAULT_ROLES.iter().map(Role::new).collect(),
        }
    }

    pub fn contains_employee(&self, name: &str) -> bool {
        self.employees.iter().any(|e| e.as_str() == name)
    }

    pub fn contains_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == name)
    }
}
