pub mod cli;
pub mod config;
pub mod usecases;
pub mod views;

use std::sync::Arc;

use anyhow::{Result, bail};
use crates::{
    domain::value_objects::{cpf_cnpj::{mask_cpf_cnpj, tax_id_kind}, invites::AcceptanceSubmission},
    infra::http::{invite_client::InviteHttpClient, session::SessionContext},
};
use tracing::{info, warn};

use crate::{
    cli::Cli,
    config::config_model::DotEnvyConfig,
    usecases::invite_acceptance::{InviteAcceptanceUseCase, InviteView},
    views::render_view,
};

pub async fn run(cli: Cli, config: DotEnvyConfig) -> Result<InviteView> {
    let session = config
        .rekan_api
        .auth_cookie
        .as_deref()
        .and_then(SessionContext::from_cookie_header);
    if config.rekan_api.auth_cookie.is_some() && session.is_none() {
        warn!("invite: PB_AUTH_COOKIE is set but holds no usable session");
    }

    let client = InviteHttpClient::new(
        config.rekan_api.base_url.clone(),
        config.rekan_api.request_timeout,
        session,
    )?;
    let usecase = InviteAcceptanceUseCase::new(Arc::new(client));
    let whatsapp_number = config.support.whatsapp_number.as_str();

    let mut view = usecase.load(&cli.token).await;
    println!("{}", render_view(&view, whatsapp_number)?);

    if let (InviteView::Invited(_), Some(cpf_cnpj)) = (&view, cli.cpf_cnpj.as_deref()) {
        info!(kind = ?tax_id_kind(cpf_cnpj), "invite: submitting acceptance");
        println!("\nEnviando aceite para {}...", mask_cpf_cnpj(cpf_cnpj));
        let submission = AcceptanceSubmission::new(cpf_cnpj, cli.accept_terms);
        view = match usecase.submit(&cli.token, &submission).await {
            Ok(next) => next,
            Err(err) => bail!("{err}"),
        };
        println!("\n{}", render_view(&view, whatsapp_number)?);
    }

    if matches!(view, InviteView::Accepted { .. }) && !cli.no_wait {
        view = wait_for_payment(&usecase, &cli.token, &config, view).await?;
    }

    if let InviteView::Failed(message) = &view {
        bail!("{message}");
    }
    Ok(view)
}

async fn wait_for_payment(
    usecase: &InviteAcceptanceUseCase,
    token: &str,
    config: &DotEnvyConfig,
    initial: InviteView,
) -> Result<InviteView> {
    let handle = usecase.start_polling(token, config.polling.interval, initial);
    let mut updates = handle.subscribe();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = updates.borrow_and_update().clone();
                println!("\n{}", render_view(&view, &config.support.whatsapp_number)?);
                if view.is_terminal() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("invite: stopped waiting for payment");
                handle.cancel();
                break;
            }
        }
    }

    Ok(handle.current())
}
