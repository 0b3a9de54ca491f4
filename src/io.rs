use crate::model::Employee;
use anyhow::Context;
use csv::ReaderBuilder;
use std::path::Path;

/// En-têtes reconnus comme porteurs du nom, par ordre de préférence.
const NAME_HEADERS: [&str; 3] = ["name", "employee", "employeename"];

/// Import d'employés depuis un fichier tabulaire à en-tête (CSV).
///
/// La colonne retenue est la première dont l'en-tête ressemble à un nom
/// (`Name`, `Employee`, `EmployeeName`, casse ignorée) ; pour les lignes où
/// cette cellule est vide, repli sur la première valeur non vide de la
/// ligne. Les lignes entièrement vides sont sautées. L'import ne dédoublonne
/// pas : l'unicité relève des opérations de gestion du roster.
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let headers = rdr.headers().context("missing header row")?.clone();
    let name_column = NAME_HEADERS.iter().find_map(|wanted| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
    });

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("invalid record in {}", path.display()))?;
        let value = name_column
            .and_then(|idx| rec.get(idx))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| rec.iter().map(str::trim).find(|v| !v.is_empty()));
        if let Some(name) = value {
            out.push(Employee::new(name));
        }
    }
    Ok(out)
}
