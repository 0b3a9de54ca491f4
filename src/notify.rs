use crate::model::{Employee, Role, Roster, Schedule};
use anyhow::{bail, Context, Result};

/// Rappel généré pour un employé et une semaine.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub employee: String,
    pub week: usize,
    pub content: String,
}

/// Permet de customiser le rendu du message (texte, mail, etc.).
pub trait ReminderRenderer {
    fn render(&self, employee: &Employee, week: usize, duties: &[Role]) -> String;
}

/// Gabarit texte simple destiné à un futur mail ou affichage.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReminder;

impl ReminderRenderer for TextReminder {
    fn render(&self, employee: &Employee, week: usize, duties: &[Role]) -> String {
        let list: String = duties.iter().map(|r| format!("- {r}\n")).collect();
        format!(
            "Bonjour {name},\n\nPour la semaine {week}, tu es de corvée sur :\n{list}\nMerci de signaler tout empêchement avant le début de la semaine.\n",
            name = employee,
            week = week,
            list = list
        )
    }
}

/// Prépare le rappel des corvées d'un employé pour une semaine donnée.
pub fn prepare_reminder(
    roster: &Roster,
    schedule: &Schedule,
    name: &str,
    week: usize,
    renderer: &dyn ReminderRenderer,
) -> Result<Reminder> {
    let employee = roster
        .employees
        .iter()
        .find(|e| e.as_str() == name)
        .with_context(|| format!("unknown employee: {name}"))?;

    let assignment = schedule
        .week(week)
        .with_context(|| format!("week {week} out of range (1..={})", schedule.len()))?;

    let duties: Vec<Role> = roster
        .roles
        .iter()
        .filter(|role| assignment.employee_for(role) == Some(employee))
        .cloned()
        .collect();

    if duties.is_empty() {
        bail!("no duty found for {name} in week {week}");
    }

    let content = renderer.render(employee, week, &duties);
    Ok(Reminder {
        employee: employee.as_str().to_string(),
        week,
        content,
    })
}
