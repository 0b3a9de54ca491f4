use super::types::{AssignOptions, SchedError};
use crate::model::{Employee, Roster, Schedule, WeekAssignment};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashSet, VecDeque};

pub(super) fn generate(roster: &Roster, opts: AssignOptions) -> Result<Schedule, SchedError> {
    let employees = &roster.employees;
    let roles = &roster.roles;

    if employees.is_empty() {
        return Err(SchedError::EmptyRoster);
    }

    // Un tour complet : autant de semaines que de rôles.
    let total_weeks = (employees.len() * roles.len()).div_ceil(employees.len());

    let mut rng = match opts.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    // Une file par rôle : permutation indépendante de tout l'effectif.
    let mut queues: Vec<VecDeque<Employee>> = roles
        .iter()
        .map(|_| {
            let mut order = employees.clone();
            order.shuffle(&mut rng);
            VecDeque::from(order)
        })
        .collect();

    let mut weeks = Vec::with_capacity(total_weeks);
    for _ in 0..total_weeks {
        let mut week = WeekAssignment::new();
        let mut assigned_this_week: HashSet<Employee> = HashSet::new();

        // Première passe : chaque rôle prend le premier de sa file encore
        // libre cette semaine, puis le renvoie en fin de file.
        for (role, queue) in roles.iter().zip(queues.iter_mut()) {
            let pos = queue.iter().position(|e| !assigned_this_week.contains(e));
            if let Some(employee) = pos.and_then(|p| queue.remove(p)) {
                assigned_this_week.insert(employee.clone());
                week.assign(role.clone(), employee.clone());
                queue.push_back(employee);
            }
        }

        // Seconde passe : rôles restés vacants (toute la file déjà prise).
        // À défaut d'employé libre, le premier de la liste est doublé :
        // un rôle ne reste jamais sans titulaire.
        for role in roles {
            if week.contains_role(role) {
                continue;
            }
            let chosen = employees
                .iter()
                .find(|e| !assigned_this_week.contains(*e))
                .or_else(|| employees.first());
            if let Some(employee) = chosen {
                assigned_this_week.insert(employee.clone());
                week.assign(role.clone(), employee.clone());
            }
        }

        weeks.push(week);
    }

    Ok(Schedule::new(weeks))
}
