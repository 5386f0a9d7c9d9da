//! Certificate command handlers.

use std::path::Path;

use tabled::Tabled;

use kong_api::{Certificate, KongClient, NewCertificate};

use crate::cli::{CertificatesArgs, CertificatesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;
use super::{services, snis};

#[derive(Tabled)]
struct CertificateRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "SNIs")]
    snis: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&Certificate> for CertificateRow {
    fn from(c: &Certificate) -> Self {
        Self {
            id: c.id.clone(),
            snis: output::join(c.snis.as_ref()),
            tags: output::join(c.tags.as_ref()),
        }
    }
}

fn print_certificate(cert: &Certificate, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format(), cert, |c| c.id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn read_pem(path: &Path, field: &str) -> Result<String, CliError> {
    let pem = std::fs::read_to_string(path)?;
    if pem.trim().is_empty() {
        return Err(CliError::Validation {
            field: field.into(),
            reason: format!("{} is empty", path.display()),
        });
    }
    Ok(pem)
}

pub async fn handle(
    client: &KongClient,
    args: CertificatesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let certificates = client.certificates();
    match args.command {
        CertificatesCommand::List(list) => {
            let all = certificates.list(list.tags.as_deref()).await?;
            let out = output::render_list(
                &global.format(),
                &all,
                |c| CertificateRow::from(c),
                |c| c.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CertificatesCommand::Get { certificate } => {
            let found = certificates
                .get(&certificate)
                .await
                .map_err(|e| CliError::for_resource(e, "certificate", &certificate))?;
            print_certificate(&found, global)
        }

        CertificatesCommand::Create {
            cert_file,
            key_file,
            snis,
            tags,
        } => {
            let new = NewCertificate {
                snis: util::non_empty(snis),
                tags: util::non_empty(tags),
                ..NewCertificate::new(read_pem(&cert_file, "cert")?, read_pem(&key_file, "key")?)
            };
            let created = certificates.create(&new).await?;
            output::notice(&format!("Certificate '{}' created", created.id), global.quiet);
            print_certificate(&created, global)
        }

        CertificatesCommand::Update(update) => {
            let changes = util::update_changes(&update)?;
            let updated = certificates
                .update(&update.id, &changes)
                .await
                .map_err(|e| CliError::for_resource(e, "certificate", &update.id))?;
            print_certificate(&updated, global)
        }

        CertificatesCommand::Delete { certificate } => {
            if !util::confirm(
                &format!("Delete certificate '{certificate}' and its SNIs?"),
                global.yes,
            )? {
                return Ok(());
            }
            certificates
                .delete(&certificate)
                .await
                .map_err(|e| CliError::for_resource(e, "certificate", &certificate))?;
            output::notice(&format!("Certificate '{certificate}' deleted"), global.quiet);
            Ok(())
        }

        CertificatesCommand::Snis { certificate } => {
            let attached = certificates
                .list_snis(&certificate)
                .await
                .map_err(|e| CliError::for_resource(e, "certificate", &certificate))?;
            snis::print_snis(&attached, global)
        }

        CertificatesCommand::Services { certificate } => {
            let presenting = certificates
                .list_services(&certificate)
                .await
                .map_err(|e| CliError::for_resource(e, "certificate", &certificate))?;
            services::print_services(&presenting, global)
        }
    }
}
