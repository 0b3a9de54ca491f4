#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use corvee::{
    export, io,
    model::{Employee, Role, Roster, Schedule, DEFAULT_ROLES},
    notes::NoteStore,
    notify::{prepare_reminder, TextReminder},
    scheduler::{detect_conflicts, generate_schedule, go_to_week, AssignOptions, ConflictKind,
        SchedError},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de rotation des corvées (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

/// Sources de l'effectif, communes à toutes les commandes.
#[derive(Args, Debug)]
struct RosterArgs {
    /// Liste "Nom1,Nom2,..." (ajoutée après l'import CSV éventuel)
    #[arg(long)]
    employees: Option<String>,

    /// CSV d'employés (colonne Name/Employee/EmployeeName, sinon la première)
    #[arg(long)]
    employees_csv: Option<String>,

    /// Liste "Role1,Role2,..." (défaut : jeu de rôles intégré)
    #[arg(long)]
    roles: Option<String>,

    /// Graine du tirage, pour un planning reproductible
    #[arg(long)]
    seed: Option<u64>,

    /// Note "SEMAINE:ROLE:TEXTE" (répétable)
    #[arg(long = "note")]
    notes: Vec<String>,

    /// Premier jour de la semaine 1 (AAAA-MM-JJ), pour dater l'affichage
    #[arg(long)]
    start_date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer la rotation complète et l'afficher
    Generate {
        #[command(flatten)]
        roster: RosterArgs,

        /// Export JSON du roster et du planning
        #[arg(long)]
        out_json: Option<String>,

        /// Radical des CSV exportés (une feuille par fichier)
        #[arg(long)]
        export_stem: Option<String>,
    },

    /// Afficher une semaine (numéro borné au planning)
    Show {
        #[command(flatten)]
        roster: RosterArgs,

        #[arg(long, default_value_t = 1)]
        week: i64,
    },

    /// Vérifier le planning (doubles réservations, rôles vacants)
    Check {
        #[command(flatten)]
        roster: RosterArgs,

        /// Export CSV des anomalies (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Générer un rappel texte pour un employé
    Notify {
        #[command(flatten)]
        roster: RosterArgs,

        #[arg(long)]
        employee: String,

        #[arg(long, default_value_t = 1)]
        week: usize,

        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },

    /// Exporter le classeur (un CSV par feuille) et/ou le JSON
    Export {
        #[command(flatten)]
        roster: RosterArgs,

        /// Radical des fichiers CSV
        #[arg(long, default_value = export::DEFAULT_EXPORT_STEM)]
        stem: String,

        #[arg(long)]
        out_json: Option<String>,
    },
}

/// État d'une invocation : tout est reconstruit à partir des arguments.
struct Session {
    roster: Roster,
    schedule: Schedule,
    notes: NoteStore,
    start_date: Option<NaiveDate>,
}

fn open_session(args: &RosterArgs) -> Result<Session> {
    let mut employees: Vec<Employee> = Vec::new();
    if let Some(path) = &args.employees_csv {
        employees = io::import_employees_csv(path)?;
    }
    if let Some(list) = &args.employees {
        employees.extend(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(Employee::new),
        );
    }

    let roles: Vec<Role> = match &args.roles {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Role::new)
            .collect(),
        None => DEFAULT_ROLES.iter().map(Role::new).collect(),
    };

    let roster = Roster::new(employees, roles);
    let schedule = generate_schedule(&roster, AssignOptions { seed: args.seed })?;

    let mut notes = NoteStore::new();
    for raw in &args.notes {
        let mut parts = raw.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(week), Some(role), Some(text)) => {
                let week: usize = week
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid week in note: {raw}"))?;
                notes.set_note(week, Role::new(role.trim()), text.trim());
            }
            _ => bail!("invalid note (expected WEEK:ROLE:TEXT): {raw}"),
        }
    }

    Ok(Session {
        roster,
        schedule,
        notes,
        start_date: args.start_date,
    })
}

/// Roster vide : avertissement plutôt qu'erreur (code retour 2).
fn open_or_notice(args: &RosterArgs) -> Result<Option<Session>> {
    match open_session(args) {
        Ok(session) => Ok(Some(session)),
        Err(err) => match err.downcast_ref::<SchedError>() {
            Some(SchedError::EmptyRoster) => {
                eprintln!("Aucun employé : renseignez --employees ou --employees-csv.");
                Ok(None)
            }
            _ => Err(err),
        },
    }
}

fn print_week(session: &Session, number: usize) {
    let Some(week) = session.schedule.week(number) else {
        println!("(planning vide)");
        return;
    };
    match session.start_date {
        Some(start) => println!(
            "Semaine {number} ({})",
            Schedule::week_start(start, number)
        ),
        None => println!("Semaine {number}"),
    }
    for role in &session.roster.roles {
        let assigned = week.employee_for(role).map(|e| e.as_str()).unwrap_or("-");
        let note = session.notes.note(number, role);
        if note.is_empty() {
            println!("  {role} → {assigned}");
        } else {
            println!("  {role} → {assigned} | {note}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Generate {
            roster,
            out_json,
            export_stem,
        } => match open_or_notice(&roster)? {
            None => 2,
            Some(session) => {
                println!(
                    "Planning {} : {} semaine(s)",
                    session.schedule.id.as_str(),
                    session.schedule.len()
                );
                for number in 1..=session.schedule.len() {
                    print_week(&session, number);
                }
                if let Some(path) = out_json {
                    export::export_schedule_json(path, &session.roster, &session.schedule)?;
                }
                if let Some(stem) = export_stem {
                    let workbook =
                        export::build_workbook(&session.roster, &session.schedule, &session.notes);
                    for path in export::export_workbook_csv(stem, &workbook)? {
                        println!("Exporté : {}", path.display());
                    }
                }
                0
            }
        },

        Commands::Show { roster, week } => match open_or_notice(&roster)? {
            None => 2,
            Some(session) => {
                let number = go_to_week(week, session.schedule.len());
                print_week(&session, number);
                println!("{} de {}", number, session.schedule.len());
                0
            }
        },

        Commands::Check { roster, report } => match open_or_notice(&roster)? {
            None => 2,
            Some(session) => {
                let conflicts = detect_conflicts(&session.roster, &session.schedule);
                if conflicts.is_empty() {
                    println!("OK: no conflicts");
                    0
                } else {
                    eprintln!("Found {} conflict(s)", conflicts.len());
                    if let Some(path) = report {
                        // CSV simple
                        let mut w = csv::Writer::from_path(path)?;
                        w.write_record(["week", "role", "other_role", "employee", "kind"])?;
                        for c in &conflicts {
                            let week = c.week.to_string();
                            w.write_record([
                                week.as_str(),
                                c.role.as_str(),
                                c.other_role.as_ref().map(Role::as_str).unwrap_or(""),
                                c.employee.as_ref().map(Employee::as_str).unwrap_or(""),
                                match c.kind {
                                    ConflictKind::DoubleBooking => "double",
                                    ConflictKind::Unassigned => "unassigned",
                                },
                            ])?;
                        }
                        w.flush()?;
                    }
                    // Code 2 = WARNING/INCOMPLETE
                    2
                }
            }
        },

        Commands::Notify {
            roster,
            employee,
            week,
            out,
        } => match open_or_notice(&roster)? {
            None => 2,
            Some(session) => {
                let renderer = TextReminder;
                let reminder = prepare_reminder(
                    &session.roster,
                    &session.schedule,
                    &employee,
                    week,
                    &renderer,
                )?;
                std::fs::write(&out, reminder.content)?;
                println!(
                    "Reminder generated for {} (week {})",
                    reminder.employee, reminder.week
                );
                0
            }
        },

        Commands::Export {
            roster,
            stem,
            out_json,
        } => match open_or_notice(&roster)? {
            None => 2,
            Some(session) => {
                let workbook =
                    export::build_workbook(&session.roster, &session.schedule, &session.notes);
                for path in export::export_workbook_csv(stem, &workbook)? {
                    println!("Exporté : {}", path.display());
                }
                if let Some(path) = out_json {
                    export::export_schedule_json(path, &session.roster, &session.schedule)?;
                }
                0
            }
        },
    };

    std::process::exit(code);
}
