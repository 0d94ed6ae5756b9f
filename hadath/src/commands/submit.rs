use anyhow::bail;
use chrono::NaiveDate;
use clap::Args;
use hadath_config::Config;
use hadath_core_contact_impl::presenter::{
    ContactFormPresenter, ContactFormPresenterConfig, SubmitOutcome,
};
use hadath_di::Provide;
use hadath_models::{
    contact::ContactField, country::Country, event_type::EventType, language::Language,
};

use super::resolve_language;
use crate::environment::{types::ContactFeature, Provider};

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Full name of the sender
    #[arg(long)]
    name: String,
    /// Email address of the sender
    #[arg(long)]
    email: String,
    /// Country of the phone number, as iso code (`IQ`) or calling code (`+964`)
    #[arg(long, default_value = "IQ")]
    country: Country,
    /// National phone number
    #[arg(long, default_value = "")]
    phone: String,
    /// conference, corporate, cultural, exhibition or other
    #[arg(long)]
    event_type: Option<EventType>,
    /// Preferred date of the event (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Language of the printed messages, defaults to the stored preference
    #[arg(long)]
    lang: Option<Language>,
    /// The message
    message: String,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut provider = Provider::new(&config)?;
        let language = resolve_language(&mut provider, self.lang).await?;

        let contact: ContactFeature = provider.provide();
        let mut presenter = ContactFormPresenter::new(
            contact,
            ContactFormPresenterConfig {
                dismiss_after: config.contact.status_dismiss_after.into(),
            },
        );

        presenter.set_name(self.name);
        presenter.set_email(self.email);
        presenter.set_country(self.country);
        presenter.set_phone(self.phone);
        presenter.set_event_type(self.event_type);
        presenter.set_event_date(self.date);
        presenter.set_message(self.message);

        let outcome = presenter.submit().await;

        if let Some(banner) = presenter.status().banner(language) {
            println!("{banner}");
        }

        match outcome {
            SubmitOutcome::Sent => Ok(()),
            SubmitOutcome::Failed => bail!("Failed to submit the contact form"),
            SubmitOutcome::Invalid => {
                for (field, message) in presenter.errors().localize(language) {
                    eprintln!("{}: {message}", field_name(field));
                }
                bail!("The contact form is invalid")
            }
        }
    }
}

fn field_name(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "--name",
        ContactField::Email => "--email",
        ContactField::Phone => "--phone",
        ContactField::EventType => "--event-type",
        ContactField::EventDate => "--date",
        ContactField::Message => "message",
    }
}
