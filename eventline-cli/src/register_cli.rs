//! `eventline register` - submit a registration for an event

use anyhow::{bail, Result};
use clap::Args;
use tracing::warn;

use eventline_core::{EventId, EventSession, EventlineConfig, RegistrationForm, Role};

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Event to register for
    #[clap(long)]
    pub event: Option<EventId>,

    /// Full name (required)
    #[clap(long, default_value = "")]
    pub name: String,

    /// Email address (required)
    #[clap(long, default_value = "")]
    pub email: String,

    /// Phone number
    #[clap(long)]
    pub phone: Option<String>,

    /// Role to register with
    #[clap(long, default_value = "member")]
    pub role: Role,
}

impl RegisterArgs {
    fn into_form(self) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_name(self.name);
        form.set_email(self.email);
        if let Some(phone) = self.phone {
            form.set_phone(phone);
        }
        form.set_role(self.role);
        form
    }
}

pub async fn execute(config: &EventlineConfig, args: RegisterArgs) -> Result<()> {
    let session = EventSession::start(config).await?;

    let event_id = args.event.clone();
    let event = event_id.as_ref().and_then(|id| session.catalog().find(id));

    if let Some(event) = event {
        if !event.registration_open() {
            bail!("Registration closed: '{}' has no spots remaining", event.name);
        }
        println!("Registering for {} ({})", event.name, event.time_range_label());
    } else if let Some(id) = &event_id {
        warn!("Event '{}' is not in the loaded catalog; submitting anyway", id);
    }

    let mut form = args.into_form();
    let outcome = match event {
        Some(event) => session.register(&mut form, Some(event)).await,
        None => {
            session
                .pipeline()
                .submit_form(&mut form, event_id.as_ref())
                .await
        }
    };

    let errors = form.visible_errors();
    if !errors.is_empty() {
        eprintln!("Please correct the following:");
        for error in errors {
            eprintln!("  - {error}");
        }
        bail!("Registration not submitted");
    }

    if outcome.is_success() {
        println!("{}", outcome.message());
        Ok(())
    } else {
        bail!("{}", outcome.message())
    }
}
