use serde_json::Value;

use backstop_models::{Backup, Deployment};

pub fn print_json(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}

/// One `id type name` line per deployment, provider order.
pub fn deployment_line(deployment: &Deployment) -> String {
    format!(
        "{} {} {}",
        deployment.id, deployment.kind, deployment.name
    )
}

pub fn print_deployments(deployments: &[Deployment]) {
    for deployment in deployments {
        println!("{}", deployment_line(deployment));
    }
}

/// Multi-line backup record as printed by `list`: a separating blank line,
/// then the labeled rows.
pub fn backup_record(backup: &Backup) -> String {
    format!(
        "\nBackup ID: {}\nType:      {}\nStatus:    {}\nBase Name: {}",
        backup.id, backup.kind, backup.status, backup.name
    )
}

pub fn print_backup_list(backups: &[Backup]) {
    for backup in backups {
        println!("{}", backup_record(backup));
    }
}

/// Full backup summary as printed by `about`, download link row included.
pub fn backup_details(backup: &Backup) -> String {
    format!(
        "Backup ID: {}\nType:      {}\nStatus:    {}\nBase Name: {}\nDownload:  {}",
        backup.id,
        backup.kind,
        backup.status,
        backup.name,
        backup.download_link.as_deref().unwrap_or("null")
    )
}

pub fn print_backup_details(backup: &Backup) {
    println!("{}", backup_details(backup));
}
