use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use backstop_models::Backup;

use crate::client::Client;
use crate::error::{Error, Result};

/// Write buffer for the archive stream.
const WRITE_BUFFER_SIZE: usize = 64 * 1024;

pub fn archive_file_name(backup: &Backup) -> String {
    format!("{}.tar.gz", backup.name)
}

/// Stream a backup's archive into `<backup.name>.tar.gz` under `target_dir`.
///
/// The backup must already carry a download link; a missing link is a hard
/// precondition failure and the archive fetch is never attempted. An
/// interrupted stream leaves whatever was written so far on disk; there is
/// no partial-file cleanup.
pub async fn download_archive(
    client: &Client,
    backup: &Backup,
    target_dir: &Path,
) -> Result<PathBuf> {
    let link = backup
        .download_link
        .as_deref()
        .ok_or_else(|| Error::NoDownloadLink(backup.id.clone()))?;

    println!("Going to download {}", backup.name);

    let response = client.fetch_archive(link).await?;
    let path = target_dir.join(archive_file_name(backup));

    let file = File::create(&path).await?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    let mut stream = response.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    writer.flush().await?;
    tracing::debug!(path = %path.display(), bytes = written, "archive written");

    println!("Done");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backup(name: &str, link: Option<&str>) -> Backup {
        Backup {
            id: "bkp-1".to_string(),
            deployment_id: "dep-1".to_string(),
            kind: "on_demand".to_string(),
            status: "complete".to_string(),
            name: name.to_string(),
            download_link: link.map(str::to_string),
        }
    }

    #[test]
    fn archive_name_is_backup_name_plus_extension() {
        let b = backup("prod-db_2016-08-01", None);
        assert_eq!(archive_file_name(&b), "prod-db_2016-08-01.tar.gz");
    }

    #[tokio::test]
    async fn missing_link_fails_before_any_fetch() {
        // Config points nowhere; a request attempt would surface as a
        // transport error, not NoDownloadLink.
        let client = Client::new(crate::ClientConfig::new("http://127.0.0.1:1", ""));
        let b = backup("prod-db_2016-08-01", None);

        let err = download_archive(&client, &b, Path::new("."))
            .await
            .unwrap_err();
        match err {
            Error::NoDownloadLink(id) => assert_eq!(id, "bkp-1"),
            other => panic!("expected NoDownloadLink, got {other:?}"),
        }
    }
}
