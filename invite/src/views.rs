use anyhow::Result;
use crates::domain::value_objects::{
    enums::invite_statuses::InviteStatus, pricing::describe_plan, whatsapp::wa_link,
};

use crate::usecases::invite_acceptance::InviteView;

const ACTIVE_WHATSAPP_TEXT: &str = "Olá! Acabei de ativar minha assinatura da Rekan.";
const EXPIRED_WHATSAPP_TEXT: &str = "Olá! Meu link de convite da Rekan expirou, pode me enviar um novo?";

/// Terminal rendering of one invite view.
pub fn render_view(view: &InviteView, whatsapp_number: &str) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();

    match view {
        InviteView::Invited(invite) => {
            lines.push(format!("Olá, {}!", invite.client_name));
            lines.push(format!(
                "{} convidou você para começar com a Rekan.",
                invite.business_name
            ));
            match invite.plan() {
                Some((tier, commitment)) => {
                    lines.push(describe_plan(tier, commitment, invite.price_first_month()))
                }
                None => lines.push("Plano a definir.".to_string()),
            }
            lines.push(String::new());
            lines.push("Para aceitar, informe seu CPF ou CNPJ e confirme os Termos de Uso:".to_string());
            lines.push("  invite <token> --cpf-cnpj <CPF ou CNPJ> --accept-terms".to_string());
        }
        InviteView::Accepted { qr_payload } => {
            lines.push("Escaneie o QR Code no app do seu banco para pagar via PIX.".to_string());
            match qr_payload {
                Some(payload) => {
                    lines.push(String::new());
                    lines.push("PIX copia e cola:".to_string());
                    lines.push(payload.clone());
                }
                None => lines.push("Gerando o código de pagamento...".to_string()),
            }
            lines.push(String::new());
            lines.push("Aguardando confirmação do pagamento...".to_string());
        }
        InviteView::Active { client_name } => {
            lines.push(format!("Tudo certo, {client_name}! Sua assinatura está ativa."));
            lines.push("Vamos conversar pelo WhatsApp para começar:".to_string());
            lines.push(format!("WhatsApp: {}", wa_link(whatsapp_number, ACTIVE_WHATSAPP_TEXT)?));
        }
        InviteView::Expired => {
            lines.push("Link expirado".to_string());
            lines.push("Peça um novo convite ao seu gestor de conteúdo.".to_string());
            lines.push(format!("WhatsApp: {}", wa_link(whatsapp_number, EXPIRED_WHATSAPP_TEXT)?));
        }
        InviteView::Invalid => {
            lines.push("Link inválido".to_string());
            lines.push("Confira se o endereço foi copiado por completo.".to_string());
        }
        InviteView::Unavailable(status) => {
            lines.push("Convite indisponível".to_string());
            lines.push(
                match status {
                    InviteStatus::PaymentFailed => "O pagamento não foi aprovado.",
                    _ => "Este convite foi cancelado.",
                }
                .to_string(),
            );
        }
        InviteView::Failed(message) => {
            lines.push(message.clone());
        }
    }

    Ok(lines.join("\n"))
}
