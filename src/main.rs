use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use teenhustle_core::api::ApiClient;
use teenhustle_core::config::Config;
use teenhustle_core::session::{SessionStore, TokenStore};
use teenhustle_core::workflow::create_intent;

/// Thin shell around the application core: restore the persisted
/// credential (or absorb one from an OAuth-return URL passed as the
/// first argument), resolve the profile, and print where the user
/// stands in the setup/verification pipeline.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    info!(api_url = %config.api_url, "starting");

    let tokens = TokenStore::open(config.token_file.clone()).await;
    let client = Arc::new(ApiClient::new(config.api_url.clone(), tokens.clone())?);
    let mut session = SessionStore::new(client.clone(), tokens);

    if let Some(return_url) = std::env::args().nth(1) {
        match session.absorb_redirect_token(&return_url).await {
            Some(Ok(cleaned)) => info!(%cleaned, "absorbed login token from redirect URL"),
            Some(Err(err)) => {
                eprintln!("login failed: {err}");
                return Ok(());
            }
            None => {}
        }
    }

    if !session.has_credential() {
        println!("Not signed in. Visit {}/auth/google to log in,", client.base_url());
        println!("then re-run with the redirect URL as the first argument.");
        return Ok(());
    }

    session.refresh().await;
    let Some(identity) = session.current_identity().cloned() else {
        println!("Session expired or profile unavailable. Please sign in again.");
        return Ok(());
    };

    println!("Signed in as {} {} <{}>", identity.first_name, identity.last_name, identity.email);

    if !identity.is_profile_complete {
        println!("Profile setup incomplete: run the setup wizard to pick a role.");
        return Ok(());
    }

    if let Some(role) = identity.role {
        println!("Role: {role} (dashboard: {})", role.dashboard());
        match create_intent(role) {
            Ok(intent) => println!("Create action: {:?} -> {}", intent, intent.create_route().0),
            Err(_) => println!("This role has no create action."),
        }
    }

    let catalog = client.expertise_catalog().await?;
    println!("Expertise areas available: {}", catalog.categories().len());
    for category in catalog.categories() {
        println!(
            "  {} ({} subcategories)",
            category.name,
            category.subcategories.len()
        );
    }

    Ok(())
}
