use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "invite")]
#[command(about = "Open a Rekan invite, accept it and wait for the payment to clear")]
pub struct Cli {
    /// Token from the `/convite/<token>` link.
    pub token: String,

    /// CPF or CNPJ of the business owner. Punctuation is ignored.
    #[arg(long = "cpf-cnpj", value_name = "DOCUMENT")]
    pub cpf_cnpj: Option<String>,

    /// Confirms the terms of use were read and accepted.
    #[arg(long)]
    pub accept_terms: bool,

    /// Exit after showing the payment QR code instead of waiting for confirmation.
    #[arg(long)]
    pub no_wait: bool,
}
