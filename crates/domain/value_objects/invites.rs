use serde::Serialize;
use thiserror::Error;

use crate::domain::value_objects::cpf_cnpj::{digits_only, validate_cpf_cnpj};

/// What the client typed on the invite form. Lives only until the POST resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptanceSubmission {
    pub cpf_cnpj: String,
    pub terms_accepted: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AcceptInviteRequest {
    pub cpf_cnpj: String,
}

/// Local form errors. Only one is reported per attempt.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("CPF ou CNPJ inválido")]
    InvalidTaxId,
    #[error("Você precisa aceitar os Termos de Uso.")]
    TermsNotAccepted,
}

impl AcceptInviteRequest {
    pub fn new(cpf_cnpj: &str) -> Self {
        Self {
            cpf_cnpj: digits_only(cpf_cnpj),
        }
    }
}

impl AcceptanceSubmission {
    pub fn new(cpf_cnpj: impl Into<String>, terms_accepted: bool) -> Self {
        Self {
            cpf_cnpj: cpf_cnpj.into(),
            terms_accepted,
        }
    }

    /// Checks the form and builds the request body. The document goes out as digits only.
    pub fn validate(&self) -> Result<AcceptInviteRequest, SubmissionError> {
        if !validate_cpf_cnpj(&self.cpf_cnpj) {
            return Err(SubmissionError::InvalidTaxId);
        }
        if !self.terms_accepted {
            return Err(SubmissionError::TermsNotAccepted);
        }

        Ok(AcceptInviteRequest::new(&self.cpf_cnpj))
    }
}
