use super::{Conflict, ConflictKind};
use crate::model::{Roster, Schedule};

pub(super) fn detect_conflicts(roster: &Roster, schedule: &Schedule) -> Vec<Conflict> {
    let mut out = Vec::new();

    for (idx, week) in schedule.weeks().iter().enumerate() {
        let number = idx + 1;

        for (i, role_a) in roster.roles.iter().enumerate() {
            let Some(employee) = week.employee_for(role_a) else {
                out.push(Conflict {
                    week: number,
                    role: role_a.clone(),
                    other_role: None,
                    employee: None,
                    kind: ConflictKind::Unassigned,
                });
                continue;
            };

            for role_b in roster.roles.iter().skip(i + 1) {
                if week.employee_for(role_b) == Some(employee) {
                    out.push(Conflict {
                        week: number,
                        role: role_a.clone(),
                        other_role: Some(role_b.clone()),
                        employee: Some(employee.clone()),
                        kind: ConflictKind::DoubleBooking,
                    });
                }
            }
        }
    }

    out
}
