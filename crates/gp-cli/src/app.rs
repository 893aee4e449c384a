use crate::commands::Commands;
use crate::error::{CliError, Result as CliResult};

use gp_catalog::{
    CatalogViewModel, CategoryFilter, DashboardTab, StatusFilter, dashboard_subtitle,
    welcome_title,
};
use gp_core::{Identity, Role};
use gp_session::{LoginForm, RegistrationForm, SessionStore};
use log::info;
use serde_json::{Value, json};

/// Wires one session store and one catalog view model to the command tree.
pub struct App {
    session: SessionStore,
    catalog: CatalogViewModel,
}

impl App {
    /// `session` should already have run its startup restore.
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            catalog: CatalogViewModel::seeded(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn execute(&mut self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { email, password } => {
                let form = LoginForm { email, password };
                form.validate()?;
                let identity = self.session.login(&form.email, &form.password).await?;
                Ok(signed_in(&identity, "Login successful"))
            }

            Commands::DemoLogin { role } => {
                let role: Role = role.parse()?;
                let identity = self.session.demo_login(role).await?;
                Ok(signed_in(&identity, "Demo login successful"))
            }

            Commands::Register {
                name,
                email,
                password,
                confirm_password,
                role,
            } => {
                let form = RegistrationForm {
                    name,
                    email,
                    password,
                    confirm_password,
                    role: role.parse()?,
                };
                form.validate()?;
                let identity = self
                    .session
                    .register(&form.email, &form.password, &form.name, form.role)
                    .await?;
                Ok(signed_in(&identity, "Registration successful"))
            }

            Commands::Logout => {
                let was_signed_in = self.session.is_authenticated();
                self.session.logout();
                Ok(json!({ "signed_out": was_signed_in }))
            }

            Commands::Whoami => {
                let identity = self.session.current().ok_or_else(CliError::not_signed_in)?;
                Ok(json!({
                    "identity": identity,
                    "title": welcome_title(&identity),
                    "subtitle": dashboard_subtitle(Some(identity.role)),
                }))
            }

            Commands::Services {
                query,
                category,
                status,
                tab,
            } => {
                let category: CategoryFilter = category.parse()?;
                let status: StatusFilter = status.parse()?;

                self.catalog.set_query(query);
                self.catalog.set_category(category);
                self.catalog.set_status(status);
                self.catalog.set_tab(tab);

                let role = self.session.current_role();
                let cards = self.catalog.visible_cards(role);
                info!("{} of {} services visible", cards.len(), self.catalog.records().len());

                Ok(json!({
                    "filters": {
                        "query": self.catalog.filter().query,
                        "category": category.to_string(),
                        "status": status.to_string(),
                        "tab": self.catalog.selected_tab(role),
                    },
                    "services": cards,
                }))
            }

            Commands::Stats => Ok(serde_json::to_value(self.catalog.counts())?),

            Commands::Tabs => {
                let tabs: Vec<Value> = DashboardTab::for_role(self.session.current_role())
                    .into_iter()
                    .enumerate()
                    .map(|(index, tab)| json!({ "index": index, "tab": tab, "label": tab.label() }))
                    .collect();
                Ok(Value::Array(tabs))
            }
        }
    }
}

fn signed_in(identity: &Identity, message: &str) -> Value {
    json!({
        "message": message,
        "identity": identity,
    })
}
