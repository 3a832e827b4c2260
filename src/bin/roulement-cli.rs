#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use roulement::{
    config::load_config_from_file,
    engine,
    io,
    model::StaffMember,
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de tableaux de service (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du tableau de service
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un membre du personnel
    AddStaff {
        /// Identifiant métier ; généré si absent
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: String,
    },

    /// Importer du personnel depuis un CSV
    ImportStaff {
        #[arg(long)]
        csv: String,
    },

    /// Importer des sites depuis un CSV
    ImportLocations {
        #[arg(long)]
        csv: String,
    },

    /// Générer les affectations de la période configurée
    Generate {
        /// Fichier JSON de configuration (période, règles, poids)
        #[arg(long)]
        config: String,
        /// Export JSON de la solution (affectations + métriques)
        #[arg(long)]
        out_json: Option<String>,
        /// Export CSV des affectations
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Auditer les contraintes sur les affectations en place
    Check {
        #[arg(long)]
        config: String,
        /// Export CSV des manquements (optionnel)
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster);
    let mut roster = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::AddStaff { id, name, role } => {
            let member = match id {
                Some(id) => StaffMember::new(id, name, role),
                None => {
                    let id = roulement::StaffId::random();
                    StaffMember::new(id.as_str(), name, role)
                }
            };
            println!("{}", member.id.as_str());
            roster.staff.push(member);
            storage.save(&roster)?;
            0
        }
        Commands::ImportStaff { csv } => {
            let staff = io::import_staff_csv(csv)?;
            roster.staff.extend(staff);
            storage.save(&roster)?;
            0
        }
        Commands::ImportLocations { csv } => {
            let locations = io::import_locations_csv(csv)?;
            roster.locations.extend(locations);
            storage.save(&roster)?;
            0
        }
        Commands::Generate {
            config,
            out_json,
            out_csv,
        } => {
            let config = load_config_from_file(config)?;
            if roster.staff.is_empty() && roster.locations.is_empty() {
                bail!("roster vide : importer du personnel et des sites d'abord");
            }
            let solution = engine::generate(&roster.staff, &roster.locations, &config)?;
            roster.assignments = solution.assignments.clone();
            storage.save(&roster)?;

            if let Some(path) = out_json {
                std::fs::write(&path, serde_json::to_string_pretty(&solution)?)?;
            }
            if let Some(path) = out_csv {
                io::export_assignments_csv(path, &roster)?;
            }

            let m = &solution.metrics;
            println!("{} affectation(s) générée(s)", solution.assignments.len());
            println!(
                "coverage={:.2} satisfaction={:.2} fairness={:.2} violations={}",
                m.coverage, m.staff_satisfaction, m.fairness_score, m.constraint_violations
            );
            0
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_roster_json(path, &roster)?;
            }
            if let Some(path) = out_csv {
                io::export_assignments_csv(path, &roster)?;
            }
            // impression compacte
            for a in &roster.assignments {
                let staff = roster
                    .find_staff_by_id(&a.staff_id)
                    .map(|s| s.name.as_str())
                    .unwrap_or("-");
                let location = roster
                    .find_location_by_id(&a.location_id)
                    .map(|l| l.name.as_str())
                    .unwrap_or("-");
                println!(
                    "{} | {} {} | {} | {}",
                    a.id, a.date, a.shift_type, location, staff
                );
            }
            0
        }
        Commands::Check { config, report } => {
            let config = load_config_from_file(config)?;
            let violations =
                engine::audit(&roster.assignments, &roster.staff, &roster.locations, &config);
            if violations.is_empty() {
                println!("OK: no violations");
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                if let Some(path) = report {
                    // CSV simple
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["assignment_id", "staff_id", "date", "kind"])?;
                    let mut id_buf = itoa::Buffer::new();
                    for v in &violations {
                        let date = v.date.to_string();
                        w.write_record([
                            id_buf.format(v.assignment_id),
                            v.staff_id.as_str(),
                            date.as_str(),
                            v.kind.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
