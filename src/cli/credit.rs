//! Credit adjustment command

use colored::Colorize;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::admin::{CreditForm, CreditOperation, UsersView};
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::with_spinner;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::CreditResultDisplay;
use crate::output::Formattable;

/// Arguments for `credit adjust`
#[derive(Debug, Clone)]
pub struct AdjustArgs {
    pub recruiter_id: String,
    pub amount: Option<String>,
    pub operation: CreditOperation,
    pub notes: Option<String>,
    pub yes: bool,
}

/// Run the credit adjust command.
///
/// Missing amount or notes are prompted for. The form is validated before
/// anything is confirmed or sent.
pub async fn adjust(opts: &GlobalOptions, args: AdjustArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let theme = ColorfulTheme::default();

    let amount = match args.amount {
        Some(amount) => amount,
        None => Input::with_theme(&theme)
            .with_prompt("Amount")
            .interact_text()?,
    };
    let notes = match args.notes {
        Some(notes) => notes,
        None => Input::with_theme(&theme)
            .with_prompt("Notes (recorded in the audit log)")
            .interact_text()?,
    };

    let form = CreditForm::new(args.recruiter_id, amount, args.operation, notes);
    let request = form.validate()?;

    if !args.yes {
        let verb = match args.operation {
            CreditOperation::Add => "Add",
            CreditOperation::Subtract => "Subtract",
        };
        let preposition = match args.operation {
            CreditOperation::Add => "to",
            CreditOperation::Subtract => "from",
        };
        let confirmed = Confirm::with_theme(&theme)
            .with_prompt(format!(
                "{} {} credits {} recruiter {}?",
                verb,
                request.amount.abs(),
                preposition,
                request.recruiter_id
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let mut view = UsersView::new();
    let response = with_spinner(
        "Adjusting credits...",
        ctx.format,
        view.adjust_credits(&ctx.client, &form),
    )
    .await?;

    match ctx.format {
        OutputFormat::Pretty => {
            if let Some(ref message) = view.list.success {
                eprintln!("{} {}", "✓".green(), message);
            }
        }
        OutputFormat::Table | OutputFormat::Json => {
            vec![CreditResultDisplay::from(response)].print(ctx.format)?;
        }
    }
    Ok(())
}
