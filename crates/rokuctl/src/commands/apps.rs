//! Apps command handlers.

use rokuctl_api::{App, EcpClient};
use tabled::Tabled;

use crate::cli::{AppsArgs, AppsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct AppRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    app_type: String,
    #[tabled(rename = "Version")]
    version: String,
}

impl AppRow {
    fn new(app: &App, color: bool) -> Self {
        Self {
            id: app.id.clone(),
            name: output::accent(&app.name, color),
            app_type: app.app_type.clone(),
            version: app.version.clone(),
        }
    }
}

fn detail(app: &App) -> String {
    [
        format!("ID:      {}", app.id),
        format!("Name:    {}", app.name),
        format!("Type:    {}", app.app_type),
        format!("Subtype: {}", app.subtype),
        format!("Version: {}", app.version),
    ]
    .join("\n")
}

pub async fn handle(client: &EcpClient, args: AppsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(&global.color);

    match args.command {
        AppsCommand::List => {
            let apps = client.query_apps().await?;
            let out = output::render_list(
                &global.output,
                &apps,
                |a| AppRow::new(a, color),
                |a| a.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AppsCommand::Active => {
            let app = client.query_active_app().await?;
            let out = output::render_single(&global.output, &app, detail, |a| a.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AppsCommand::Launch { query, exact, id } => {
            if id {
                client.launch_app(&query).await?;
                if !global.quiet {
                    eprintln!("✓ Launched app {query}");
                }
                return Ok(());
            }

            let app = if exact {
                client.launch_app_by_exact_name(&query).await?
            } else {
                client.launch_app_by_name_match(&query).await?
            };
            if !global.quiet {
                eprintln!(
                    "✓ Launched {} {}",
                    output::accent(&app.name, color),
                    output::muted(&format!("({})", app.id), color)
                );
            }
            Ok(())
        }
    }
}
