//! Configuration paths for Facture
//!
//! Simple path resolution with sensible defaults.
//! All paths are under ~/.facture/

use std::path::PathBuf;

/// Resolve the Facture home directory.
///
/// Priority:
/// 1. `FACTURE_HOME` environment variable
/// 2. `~/.facture`
/// 3. `./.facture` when no home directory is resolvable
pub fn facture_home() -> PathBuf {
    if let Ok(dir) = std::env::var("FACTURE_HOME") {
        return PathBuf::from(dir);
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".facture");
    }
    PathBuf::from("./.facture")
}

/// Get logs directory: ~/.facture/logs
pub fn logs_dir() -> PathBuf {
    facture_home().join("logs")
}

/// Ensure the logs directory exists
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Arguments for the config command
#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Show resolved paths in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the config command - shows current paths
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let home = facture_home();
    let logs = logs_dir();
    let records = facture_schema::seed_invoices().len();

    if args.json {
        let config = serde_json::json!({
            "home": home.to_string_lossy(),
            "logs": {
                "path": logs.to_string_lossy(),
                "exists": logs.exists(),
            },
            "worklist_source": {
                "kind": "embedded seed",
                "records": records,
            },
        });
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("FACTURE CONFIGURATION");
        println!("=====================");
        println!();
        println!("Home:    {}", home.display());
        println!();
        println!("Logs:    {}", logs.display());
        println!(
            "         exists: {}",
            if logs.exists() { "yes" } else { "no" }
        );
        println!();
        println!("Source:  embedded seed ({} records)", records);
    }

    Ok(())
}
