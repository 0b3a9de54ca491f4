use crate::model::{Roster, Schedule};
use crate::notes::NoteStore;
use anyhow::Context;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Radical par défaut des fichiers exportés.
pub const DEFAULT_EXPORT_STEM: &str = "Maintenance_and_Cleaning_Schedule";

/// Feuille nommée : lignes de cellules texte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// Classeur en mémoire, écrit ensuite feuille par feuille.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Construit le classeur d'export.
///
/// Feuille 1 `Assignments` : en-tête `Week, <rôles...>, Notes`, une ligne
/// par semaine ; la cellule Notes concatène les lignes `{rôle}: {texte}`
/// de la semaine, dans l'ordre des rôles. Feuilles 2 et 3 : listes des
/// employés et des rôles.
pub fn build_workbook(roster: &Roster, schedule: &Schedule, notes: &NoteStore) -> Workbook {
    let mut grid = Vec::with_capacity(schedule.len() + 1);

    let mut header = Vec::with_capacity(roster.roles.len() + 2);
    header.push("Week".to_string());
    header.extend(roster.roles.iter().map(|r| r.as_str().to_string()));
    header.push("Notes".to_string());
    grid.push(header);

    let mut buf = itoa::Buffer::new();
    for (idx, week) in schedule.weeks().iter().enumerate() {
        let number = idx + 1;
        let mut row = Vec::with_capacity(roster.roles.len() + 2);
        row.push(buf.format(number).to_string());
        for role in &roster.roles {
            let cell = week
                .employee_for(role)
                .map(|e| e.as_str().to_string())
                .unwrap_or_default();
            row.push(cell);
        }
        let week_notes: Vec<String> = notes
            .notes_for_week(number, &roster.roles)
            .map(|(role, text)| format!("{role}: {text}"))
            .collect();
        row.push(week_notes.join("\n"));
        grid.push(row);
    }

    let employees = std::iter::once(vec!["Employees".to_string()])
        .chain(roster.employees.iter().map(|e| vec![e.as_str().to_string()]))
        .collect();
    let roles = std::iter::once(vec!["Roles".to_string()])
        .chain(roster.roles.iter().map(|r| vec![r.as_str().to_string()]))
        .collect();

    Workbook {
        sheets: vec![
            Sheet {
                name: "Assignments".into(),
                rows: grid,
            },
            Sheet {
                name: "Employees".into(),
                rows: employees,
            },
            Sheet {
                name: "Roles".into(),
                rows: roles,
            },
        ],
    }
}

/// Écrit chaque feuille dans `{stem}_{feuille}.csv` ; renvoie les chemins.
pub fn export_workbook_csv<P: AsRef<Path>>(
    stem: P,
    workbook: &Workbook,
) -> anyhow::Result<Vec<PathBuf>> {
    let stem = stem.as_ref();
    let mut written = Vec::with_capacity(workbook.sheets.len());
    for sheet in &workbook.sheets {
        let file_name = match stem.file_name().and_then(|s| s.to_str()) {
            Some(base) => format!("{base}_{}.csv", sheet.name),
            None => format!("{}.csv", sheet.name),
        };
        let path = stem.with_file_name(file_name);
        let mut w = WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        for row in &sheet.rows {
            w.write_record(row)?;
        }
        w.flush()?;
        written.push(path);
    }
    Ok(written)
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    roster: &'a Roster,
    schedule: &'a Schedule,
}

/// Export JSON du roster et du planning (écriture atomique).
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    schedule: &Schedule,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(&ExportDocument { roster, schedule })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
