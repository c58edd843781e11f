use crate::domain::value_objects::enums::{commitments::Commitment, tiers::Tier};

/// Total charge for one billing cycle of `tier` under `commitment`, in BRL.
pub fn price(tier: Tier, commitment: Commitment) -> f64 {
    match (tier, commitment) {
        (Tier::Basico, Commitment::Mensal) => 69.90,
        (Tier::Basico, Commitment::Trimestral) => 179.70,
        (Tier::Parceiro, Commitment::Mensal) => 108.90,
        (Tier::Parceiro, Commitment::Trimestral) => 299.70,
        (Tier::Profissional, Commitment::Mensal) => 249.90,
        (Tier::Profissional, Commitment::Trimestral) => 599.70,
    }
}

/// `R$ 108,90` style amount.
pub fn format_brl(amount: f64) -> String {
    format!("R$ {:.2}", amount).replace('.', ",")
}

/// Plan line shown to the client, e.g. `Plano Parceiro (Trimestral): R$ 299,70 (3x de R$ 99,90)`.
pub fn describe_plan(tier: Tier, commitment: Commitment, price: f64) -> String {
    let months = commitment.months();
    let price_desc = if months == 1 {
        format!("{}/mês", format_brl(price))
    } else {
        format!(
            "{} ({}x de {})",
            format_brl(price),
            months,
            format_brl(price / months as f64)
        )
    };

    format!(
        "Plano {} ({}): {}",
        tier.display_name(),
        commitment.display_name(),
        price_desc
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amounts_with_comma_decimals() {
        assert_eq!(format_brl(108.9), "R$ 108,90");
        assert_eq!(format_brl(69.9), "R$ 69,90");
    }

    #[test]
    fn monthly_plan_is_described_per_month() {
        let price = price(Tier::Parceiro, Commitment::Mensal);
        assert_eq!(
            describe_plan(Tier::Parceiro, Commitment::Mensal, price),
            "Plano Parceiro (Mensal): R$ 108,90/mês"
        );
    }

    #[test]
    fn quarterly_plan_shows_installments() {
        let price = price(Tier::Profissional, Commitment::Trimestral);
        assert_eq!(
            describe_plan(Tier::Profissional, Commitment::Trimestral, price),
            "Plano Profissional (Trimestral): R$ 599,70 (3x de R$ 199,90)"
        );
    }
}
